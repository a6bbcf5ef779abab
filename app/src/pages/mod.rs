//! Application pages (routes).

mod courses;
pub mod dashboard;
mod profile;
mod upcoming;

pub use courses::{CourseDetailView, CoursesView};
pub use dashboard::{DashboardContent, DashboardView};
pub use profile::ProfileView;
pub use upcoming::{CareerPathView, ExamView, NotFound};

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use yanyu_common::routes;

/// Route table.
#[component]
pub fn MainWorkspace() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound/> }>
            <Route path=path!("/") view=DashboardView />
            <Route path=path!("/courses") view=CoursesView />
            <Route path=path!("/courses/:id") view=CourseDetailView />
            <Route path=path!("/exam") view=ExamView />
            <Route path=path!("/career-path") view=CareerPathView />
            <Route path=path!("/profile") view=ProfileView />
            // Outdated addresses
            <Route path=path!("/dashboard") view=LegacyRedirect />
            <Route path=path!("/learn") view=LegacyRedirect />
            <Route path=path!("/course/:id") view=LegacyRedirect />
        </Routes>
    }
}

/// Sends an outdated address to its current location.
#[component]
fn LegacyRedirect() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    let target = routes::legacy_redirect(&path).unwrap_or_else(|| routes::HOME.to_string());
    log::info!("[router] redirecting {} -> {}", path, target);

    view! { <Redirect path=target /> }
}
