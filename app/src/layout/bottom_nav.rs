//! Bottom navigation bar (mobile only).

use leptos::prelude::*;

use yanyu_common::{resolve_nav, NavItemState, NAV_ITEMS};

use crate::navigation::{use_navigator, NavigatorHandle};

/// Accessible name of the navigation landmark.
pub const NAV_ARIA_LABEL: &str = "主导航";

const ITEM_CLASS: &str = "flex flex-col items-center justify-center flex-1 h-full py-2 px-1 rounded-lg transition-all duration-200 touch-target";

/// Fixed bar at the bottom of the viewport, hidden from the `md` breakpoint up.
///
/// `current_path` is read once per pass and every item is resolved against
/// that same value.
#[component]
pub fn BottomNav(#[prop(into)] current_path: Signal<String>) -> impl IntoView {
    let navigator = use_navigator();
    let items = Memo::new(move |_| resolve_nav(&current_path.get(), NAV_ITEMS));

    view! {
        <nav
            class="bottom-nav fixed bottom-0 left-0 right-0 z-50 bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-700 shadow-lg md:hidden"
            role="navigation"
            aria-label=NAV_ARIA_LABEL
            data-bottom-nav="true"
        >
            <div class="flex justify-around items-center h-16 px-2 w-full">
                {move || {
                    let navigator = navigator.clone();
                    items.get().into_iter().map(|state| {
                        view! { <NavButton state=state navigator=navigator.clone() /> }
                    }).collect::<Vec<_>>()
                }}
            </div>
        </nav>
    }
}

#[component]
fn NavButton(state: NavItemState, navigator: NavigatorHandle) -> impl IntoView {
    let route = state.item.route;
    let key_navigator = navigator.clone();

    let class = if state.is_active {
        format!("{ITEM_CLASS} text-blue-600 bg-blue-100")
    } else {
        format!("{ITEM_CLASS} text-gray-500 hover:text-blue-500 hover:bg-gray-100")
    };

    view! {
        <button
            type="button"
            class=class
            title=state.item.description
            aria-label=state.aria_label
            aria-current=state.is_active.then_some("page")
            on:click=move |_| navigator.navigate_to(route)
            on:keydown=move |ev| key_navigator.navigate_on_key(&ev, route)
        >
            <span
                class="text-xl leading-none mb-1"
                data-testid=state.item.icon.test_id()
                aria-hidden="true"
            >
                {state.item.icon.glyph()}
            </span>
            <span class="text-xs font-medium">{state.item.label}</span>
        </button>
    }
}
