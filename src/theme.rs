//! Theme Context
//!
//! Light/dark theme shared via the Leptos Context API, persisted under the
//! "theme" storage slot and mirrored to the document body class so the CSS
//! variables switch with it.

use leptos::prelude::*;

use crate::storage::{LocalStorage, StorageBackend};

/// Storage slot holding the raw theme string
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown strings fall back to light
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }
}

/// Install the theme context for all children; reads the persisted theme
/// once, then writes it back (and restyles the body) on every change.
pub fn provide_theme() {
    let (theme, set_theme) = signal(load_theme());

    Effect::new(move |_| {
        let theme = theme.get();
        apply_to_body(theme);
        save_theme(theme);
    });

    provide_context(ThemeContext { theme, set_theme });
}

/// Get the theme context; panics when called outside `provide_theme`
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn load_theme() -> Theme {
    match LocalStorage.get(THEME_KEY) {
        Ok(Some(raw)) => Theme::from_str(&raw),
        Ok(None) => Theme::default(),
        Err(_) => Theme::default(),
    }
}

// The slot holds the bare string, not JSON, so it stays readable by hand.
fn save_theme(theme: Theme) {
    if let Err(e) = LocalStorage.set(THEME_KEY, theme.as_str()) {
        web_sys::console::error_1(&format!("failed persisting theme: {e}").into());
    }
}

fn apply_to_body(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        body.set_class_name(theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_string_round_trip() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Theme::Light);
    }

    #[test]
    fn unknown_theme_string_falls_back_to_light() {
        assert_eq!(Theme::from_str("solarized"), Theme::Light);
        assert_eq!(Theme::from_str(""), Theme::Light);
    }

    #[test]
    fn toggled_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
