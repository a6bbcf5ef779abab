//! YanYu Smart Cloud³ Learning Hub
//!
//! Mobile-first Leptos frontend for the YanYu AI learning platform.
//!
//! # Layout
//! - [`layout`]: brand header and the bottom navigation bar
//! - [`pages`]: routed views (dashboard, courses, profile, ...)
//! - [`navigation`]: route dispatch behind a swappable [`navigation::Navigator`]
//! - [`config`]: build-time settings and data source selection

pub mod app;
pub mod components;
pub mod config;
pub mod layout;
pub mod navigation;
pub mod pages;
pub mod theme;

pub use app::App;
pub use config::{AppConfig, ConfigError};
