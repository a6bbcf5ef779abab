//! Shared types for the YanYu learning hub.
//!
//! Everything here is plain data: the records delivered by the backend
//! ([`Course`], [`UserProfile`]), the [`LoadState`] every data hook reports,
//! the fixed bottom-navigation table and its active-state resolver.
//! Nothing in this crate depends on the rendering framework, so the same
//! types are usable from native tests and from the WASM client.

pub mod load_state;
pub mod models;
pub mod navigation;
pub mod routes;

pub use load_state::LoadState;
pub use models::{Course, CourseLevel, CourseProgress, UserProfile};
pub use navigation::{NavIcon, NavItem, NavItemState, ACTIVE_LABEL_SUFFIX, NAV_ITEMS, resolve_nav};
