use codee::string::JsonSerdeCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use leptos_use::use_preferred_dark;
use serde::{Deserialize, Serialize};

const THEME_STORAGE_KEY: &str = "yanyu-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow `prefers-color-scheme`.
    System,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "浅色",
            ThemeMode::Dark => "深色",
            ThemeMode::System => "跟随系统",
        }
    }

    /// Whether this mode renders dark, given the system preference.
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_prefers_dark,
        }
    }

    pub fn all() -> &'static [ThemeMode] {
        &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: Signal<ThemeMode>,
    pub is_dark: Signal<bool>,
    set_mode: WriteSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn set(&self, mode: ThemeMode) {
        log::info!("[theme] switching to {:?}", mode);
        self.set_mode.set(mode);
    }
}

/// Loads the saved mode, keeps it persisted and mirrors it as the `dark`
/// class on `<html>`.
pub fn provide_theme_context() {
    let (mode, set_mode, _) = use_local_storage::<ThemeMode, JsonSerdeCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let is_dark = Signal::derive(move || mode.get().is_dark(prefers_dark.get()));

    Effect::new(move |_| {
        let dark = is_dark.get();
        if let Some(root) = document().document_element() {
            let classes = root.class_list();
            let _ = if dark {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
        }
    });

    provide_context(ThemeContext {
        mode,
        is_dark,
        set_mode,
    });
}

/// # Panics
///
/// Panics if `provide_theme_context` was not called higher up.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark(true));
    }

    #[test]
    fn test_system_follows_preference() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
    }
}
