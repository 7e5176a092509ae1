//! Configuration types for the site
//!
//! Defines:
//! - `Settings` - Root of `site.toml`
//! - `PreferenceSettings` - Where the theme preference is stored

use lws_core::DEFAULT_THEME_KEY;
use serde::{Deserialize, Serialize};

pub use lws_relay::RelayConfig;

/// Root of `site.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub preferences: PreferenceSettings,
}

/// `[preferences]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreferenceSettings {
    /// Store key holding `"true"`/`"false"` for dark mode
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            theme_key: default_theme_key(),
        }
    }
}

fn default_theme_key() -> String {
    DEFAULT_THEME_KEY.to_string()
}
