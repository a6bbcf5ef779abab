//! # YanYu Client
//!
//! Reactive data layer for the YanYu learning hub.
//!
//! Views never fetch anything themselves. They call [`use_user`] and
//! [`use_courses`], which return `Signal<LoadState<_>>` values driven by the
//! [`DataSource`] installed with [`DataProvider`].
//!
//! ## Sources
//!
//! - [`HttpSource`]: JSON over HTTP (`GET {base}/user`, `GET {base}/courses`)
//! - [`DemoSource`]: fixed records, no network
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use leptos::prelude::*;
//! use yanyu_client::{DataProvider, HttpSource, use_courses};
//! use yanyu_common::LoadState;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     view! {
//!         <DataProvider source=Arc::new(HttpSource::new("https://api.example.com"))>
//!             <CourseCount/>
//!         </DataProvider>
//!     }
//! }
//!
//! #[component]
//! fn CourseCount() -> impl IntoView {
//!     let courses = use_courses();
//!     view! {
//!         {move || match courses.get() {
//!             LoadState::Ready(list) => list.len().to_string(),
//!             LoadState::Error(message) => message,
//!             LoadState::Loading => "…".to_string(),
//!         }}
//!     }
//! }
//! ```

mod context;
mod demo;
mod error;
mod hooks;
mod provider;
mod source;

pub use context::DataContext;
pub use demo::{demo_courses, demo_user, DemoSource};
pub use error::ClientError;
pub use hooks::{use_course, use_courses, use_user, COURSES_FETCH_FAILED, USER_FETCH_FAILED};
pub use provider::DataProvider;
pub use source::{DataSource, HttpSource, SourceFuture};
