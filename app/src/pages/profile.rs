//! Learner profile and settings.

use leptos::prelude::*;

use yanyu_client::use_user;
use yanyu_common::{LoadState, UserProfile};

use crate::components::ErrorNotice;
use crate::theme::{use_theme, ThemeMode};

#[component]
pub fn ProfileView() -> impl IntoView {
    let user = use_user();

    view! {
        <div class="container mx-auto px-4 py-6 space-y-6">
            {move || match user.get() {
                LoadState::Loading => view! {
                    <div class="h-28 bg-gray-200 dark:bg-gray-800 rounded-lg animate-pulse" aria-busy="true"></div>
                }.into_any(),
                LoadState::Error(message) => view! { <ErrorNotice message=message /> }.into_any(),
                LoadState::Ready(profile) => view! { <ProfileCard profile=profile /> }.into_any(),
            }}
            <ThemeSettings/>
        </div>
    }
}

#[component]
fn ProfileCard(profile: UserProfile) -> impl IntoView {
    let initial = profile.name.chars().next().map(String::from).unwrap_or_default();
    let joined = (!profile.join_date.is_empty()).then(|| format!("加入于 {}", profile.join_date));

    view! {
        <section class="bg-white dark:bg-gray-900 rounded-lg shadow-sm p-5 flex items-center gap-4">
            <div class="w-14 h-14 rounded-full bg-blue-100 text-blue-600 text-xl font-bold flex items-center justify-center">
                {initial}
            </div>
            <div class="space-y-0.5">
                <h1 class="text-lg font-semibold">{profile.name}</h1>
                <p class="text-sm text-blue-600">{profile.level}</p>
                <p class="text-xs text-gray-500">{profile.email}</p>
                {joined.map(|text| view! { <p class="text-xs text-gray-400">{text}</p> })}
            </div>
        </section>
    }
}

/// Light / dark / system switch.
#[component]
fn ThemeSettings() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section class="bg-white dark:bg-gray-900 rounded-lg shadow-sm p-5">
            <h2 class="text-base font-semibold mb-3">"外观"</h2>
            <div class="flex gap-2" role="radiogroup" aria-label="主题">
                {ThemeMode::all().iter().copied().map(|mode| {
                    let selected = move || theme.mode.get() == mode;
                    view! {
                        <button
                            type="button"
                            role="radio"
                            aria-checked=move || selected().to_string()
                            class=move || if selected() {
                                "px-3 py-1.5 rounded-lg text-sm bg-blue-600 text-white"
                            } else {
                                "px-3 py-1.5 rounded-lg text-sm bg-gray-100 dark:bg-gray-800"
                            }
                            on:click=move |_| theme.set(mode)
                        >
                            {mode.name()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
