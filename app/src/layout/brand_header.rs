//! Brand header with the home button.

use leptos::prelude::*;

use yanyu_common::routes;

use crate::navigation::use_navigator;

pub const BRAND_TITLE: &str = "YanYu Smart Cloud³";
pub const BRAND_SUBTITLE: &str = "Learning Hub";
pub const LOGO_ALT: &str = "YanYu Logo";
const LOGO_SRC: &str = "/images/yanyu-logo.png";

/// Logo scale. Unknown names fall back to `Md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrandSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BrandSize {
    pub fn parse(value: &str) -> Self {
        match value {
            "sm" => BrandSize::Sm,
            "lg" => BrandSize::Lg,
            _ => BrandSize::Md,
        }
    }

    pub fn logo_class(&self) -> &'static str {
        match self {
            BrandSize::Sm => "w-8 h-8",
            BrandSize::Md => "w-10 h-10",
            BrandSize::Lg => "w-12 h-12",
        }
    }
}

impl From<&str> for BrandSize {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for BrandSize {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Page banner. The logo button takes the user back to the home route.
#[component]
pub fn BrandHeader(
    /// "sm", "md" or "lg"
    #[prop(optional, into)]
    size: BrandSize,
) -> impl IntoView {
    let navigator = use_navigator();
    let key_navigator = navigator.clone();
    let logo_failed = RwSignal::new(false);

    view! {
        <header class="bg-gradient-to-r from-blue-600 via-indigo-600 to-purple-600 text-white px-4 py-3 shadow-md">
            <button
                type="button"
                aria-label="返回首页"
                class="flex items-center gap-3 rounded-lg focus:outline-none focus-visible:ring-2 focus-visible:ring-white"
                on:click=move |_| navigator.navigate_to(routes::HOME)
                on:keydown=move |ev| key_navigator.navigate_on_key(&ev, routes::HOME)
            >
                <img
                    src=LOGO_SRC
                    alt=LOGO_ALT
                    class=move || {
                        let hidden = if logo_failed.get() { " hidden" } else { "" };
                        format!("{} rounded-lg object-contain bg-white/10{}", size.logo_class(), hidden)
                    }
                    on:error=move |_| {
                        log::warn!("[BrandHeader] logo failed to load, showing monogram");
                        logo_failed.set(true);
                    }
                />
                <Show when=move || logo_failed.get()>
                    <span
                        class=format!("{} rounded-lg bg-white/20 flex items-center justify-center font-bold", size.logo_class())
                        aria-hidden="true"
                    >
                        "言"
                    </span>
                </Show>
                <div class="flex flex-col items-start leading-tight">
                    <span class="text-lg md:text-xl lg:text-2xl font-bold">{BRAND_TITLE}</span>
                    <span class="text-sm md:text-base text-white/80">{BRAND_SUBTITLE}</span>
                </div>
            </button>
        </header>
    }
}
