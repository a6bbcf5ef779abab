use leptos::prelude::*;
use leptos::task::spawn_local;

use yanyu_common::{Course, LoadState, UserProfile};

use crate::context::DataContext;
use crate::source::{DataSource, SourceFuture};

/// Message shown when the learner profile cannot be loaded.
pub const USER_FETCH_FAILED: &str = "获取用户信息失败";
/// Message shown when the course catalogue cannot be loaded.
pub const COURSES_FETCH_FAILED: &str = "获取课程列表失败";

/// Starts one fetch and reports it through a signal.
///
/// The signal starts as `Loading` and receives exactly one terminal value.
/// Failures are logged with their cause; the signal carries `failure_message`.
fn use_load<T, F>(what: &'static str, failure_message: &'static str, fetch: F) -> Signal<LoadState<T>>
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce(&dyn DataSource) -> SourceFuture<T>,
{
    let ctx = expect_context::<DataContext>();
    let source = ctx.source();
    let state = RwSignal::new(LoadState::<T>::Loading);

    log::debug!("[{}] fetching from {} source", what, source.name());
    let pending = fetch(source.as_ref());

    spawn_local(async move {
        let next = match pending.await {
            Ok(data) => {
                log::debug!("[{}] loaded", what);
                LoadState::Ready(data)
            }
            Err(e) => {
                log::error!("[{}] {}", what, e);
                LoadState::Error(failure_message.to_string())
            }
        };
        // The component that asked may already be gone
        let _ = state.try_set(next);
    });

    Signal::derive(move || state.get())
}

/// Hook returning the signed-in learner's profile.
///
/// Every call starts its own fetch; nothing is cached and nothing is retried.
///
/// # Panics
///
/// Panics if called outside of a `DataProvider`.
///
/// # Example
///
/// ```rust,ignore
/// #[component]
/// fn Greeting() -> impl IntoView {
///     let user = use_user();
///     view! {
///         {move || match user.get() {
///             LoadState::Loading => "…".to_string(),
///             LoadState::Error(message) => message,
///             LoadState::Ready(user) => format!("欢迎回来，{}！", user.name),
///         }}
///     }
/// }
/// ```
pub fn use_user() -> Signal<LoadState<UserProfile>> {
    use_load("use_user", USER_FETCH_FAILED, |source| source.fetch_user())
}

/// Hook returning the course catalogue.
///
/// # Panics
///
/// Panics if called outside of a `DataProvider`.
pub fn use_courses() -> Signal<LoadState<Vec<Course>>> {
    use_load("use_courses", COURSES_FETCH_FAILED, |source| source.fetch_courses())
}

/// Hook returning a single catalogue course by id.
///
/// Ready with `None` when the catalogue loaded but has no such course.
///
/// # Panics
///
/// Panics if called outside of a `DataProvider`.
pub fn use_course(course_id: Signal<String>) -> Signal<LoadState<Option<Course>>> {
    let courses = use_courses();

    Signal::derive(move || {
        let id = course_id.get();
        courses
            .get()
            .map(|list| list.into_iter().find(|course| course.id == id))
    })
}
