//! Light/dark presentation theme and its persisted encoding

use serde::{Deserialize, Serialize};

/// Store key used when the configuration does not name one
pub const DEFAULT_THEME_KEY: &str = "darkMode";

/// Class toggled on the document body while dark mode is active
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Decode a persisted value. Only the exact string `"true"` is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        Theme::from_dark(value == Some("true"))
    }

    /// Encoding written to the preference store
    pub fn as_stored(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Body class for this theme, if any
    pub fn css_class(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_MODE_CLASS)
    }

    /// Label for the button that switches away from this theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319} Dark Mode",
            Theme::Dark => "\u{2600}\u{FE0F} Light Mode",
        }
    }
}
