//! Navigation dispatch.
//!
//! Components never call the router directly. They dispatch through a
//! [`NavigatorHandle`] taken from context, so the same views run against the
//! real router in the app and against a [`RecordingNavigator`] in tests.

use std::sync::{Arc, Mutex};

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Something that can move the app to another route.
///
/// Fire-and-forget: failures are the implementation's business.
pub trait Navigator: Send + Sync + 'static {
    fn navigate_to(&self, route: &str);
}

/// Cloneable handle to the navigator in context.
#[derive(Clone)]
pub struct NavigatorHandle(Arc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator) -> Self {
        Self(Arc::new(navigator))
    }

    pub fn navigate_to(&self, route: &str) {
        log::debug!("[navigation] -> {}", route);
        self.0.navigate_to(route);
    }

    /// Dispatches to `route` if `event` is an activation key.
    ///
    /// The browser default is suppressed so a focused button does not turn
    /// the same key press into a second, synthetic click.
    pub fn navigate_on_key(&self, event: &KeyboardEvent, route: &str) {
        if is_activation_key(&event.key()) {
            event.prevent_default();
            self.navigate_to(route);
        }
    }
}

/// Keys that activate a focused control: Enter and Space.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Navigator backed by `leptos_router`.
struct RouterNavigator<F>(F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Send + Sync + 'static,
{
    fn navigate_to(&self, route: &str) {
        (self.0)(route, NavigateOptions::default());
    }
}

pub fn provide_navigator(navigator: impl Navigator) {
    provide_context(NavigatorHandle::new(navigator));
}

/// Installs the router-backed navigator. Must be called inside a `<Router>`.
pub fn provide_router_navigator() {
    provide_navigator(RouterNavigator(use_navigate()));
}

/// Hook to get the navigator.
///
/// # Panics
///
/// Panics if no navigator was provided.
pub fn use_navigator() -> NavigatorHandle {
    expect_context::<NavigatorHandle>()
}

/// Navigator that only records where it was asked to go.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every dispatched route, oldest first.
    pub fn routes(&self) -> Vec<String> {
        self.routes
            .lock()
            .map(|routes| routes.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.to_string());
        }
    }
}
