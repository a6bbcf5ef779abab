//! Page chrome shared by every route.

mod bottom_nav;
mod brand_header;

pub use bottom_nav::{BottomNav, NAV_ARIA_LABEL};
pub use brand_header::{BrandHeader, BrandSize, BRAND_SUBTITLE, BRAND_TITLE, LOGO_ALT};

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::navigation::provide_router_navigator;
use crate::pages::MainWorkspace;

/// Root layout: header, routed content and the mobile bottom bar.
///
/// Must be rendered inside a `<Router>`.
#[component]
pub fn AppShell() -> impl IntoView {
    provide_router_navigator();

    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-950 text-gray-900 dark:text-gray-100">
            <BrandHeader/>
            // Leave room for the fixed bottom bar on small screens
            <main class="pb-20 md:pb-0">
                <MainWorkspace/>
            </main>
            <BottomNav current_path=current_path/>
        </div>
    }
}
