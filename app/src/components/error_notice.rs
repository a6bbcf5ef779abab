use leptos::prelude::*;

/// Inline error for one region of a page. The message is shown as given.
#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div
            class="rounded-lg border border-red-200 bg-red-50 text-red-700 px-4 py-3 text-sm"
            role="alert"
        >
            {message}
        </div>
    }
}
