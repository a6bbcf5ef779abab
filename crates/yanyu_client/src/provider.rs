use std::sync::Arc;

use leptos::prelude::*;

use crate::context::DataContext;
use crate::source::DataSource;

/// Provider component that makes a [`DataSource`] available to the data hooks.
///
/// Wrap the part of the tree that calls [`use_user`](crate::use_user) or
/// [`use_courses`](crate::use_courses).
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use yanyu_client::{DataProvider, DemoSource};
///
/// #[component]
/// pub fn App() -> impl IntoView {
///     view! {
///         <DataProvider source=Arc::new(DemoSource::default())>
///             <Dashboard />
///         </DataProvider>
///     }
/// }
/// ```
#[component]
pub fn DataProvider(
    /// Where user and course records are fetched from
    source: Arc<dyn DataSource>,
    /// Child components
    children: Children,
) -> impl IntoView {
    log::info!("[DataProvider] using {} data source", source.name());
    provide_context(DataContext::new(source));

    children()
}
