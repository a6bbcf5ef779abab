use leptos::prelude::*;

const PULSE: &str = "bg-gray-200 dark:bg-gray-800 rounded animate-pulse";

/// Placeholder shown while the dashboard's data is loading.
#[component]
pub fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div data-testid="dashboard-loading" class="space-y-6" aria-busy="true" aria-live="polite">
            <span class="sr-only">"加载中..."</span>
            // Banner
            <div class="rounded-xl bg-gray-100 dark:bg-gray-900 p-5 space-y-2">
                <div class=format!("w-48 h-6 {PULSE}")></div>
                <div class=format!("w-32 h-4 {PULSE}")></div>
            </div>
            // Statistics
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                {(0..4).map(|_| view! {
                    <div class="bg-white dark:bg-gray-900 rounded-lg shadow-sm p-4 border">
                        <div class=format!("w-8 h-8 mx-auto mb-2 {PULSE}")></div>
                        <div class=format!("w-16 h-6 mx-auto mb-1 {PULSE}")></div>
                        <div class=format!("w-20 h-4 mx-auto {PULSE}")></div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
            // Course cards
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {(0..2).map(|_| view! {
                    <div class="bg-white dark:bg-gray-900 rounded-lg shadow-sm p-4 space-y-2">
                        <div class=format!("w-3/4 h-5 {PULSE}")></div>
                        <div class=format!("w-1/3 h-4 {PULSE}")></div>
                        <div class=format!("w-full h-2 {PULSE}")></div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
