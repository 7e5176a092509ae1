//! Settings parser for site.toml

use super::types::Settings;
use lws_core::prelude::*;

/// Parse and validate the contents of `site.toml`.
///
/// Missing sections and keys take their defaults. The relay endpoint must be
/// an absolute http(s) URL and the theme key must not be blank.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)
        .map_err(|e| Error::config_invalid(format!("site.toml: {}", e)))?;

    settings.relay.endpoint_url()?;

    if settings.preferences.theme_key.trim().is_empty() {
        return Err(Error::config_invalid("preferences.theme_key must not be empty"));
    }

    Ok(settings)
}

/// Load settings from `site.toml` contents.
///
/// Returns default settings if the content can't be parsed or fails validation.
pub fn load_settings(content: &str) -> Settings {
    match parse_settings(content) {
        Ok(settings) => {
            debug!("Loaded site settings (relay: {})", settings.relay.endpoint);
            settings
        }
        Err(e) => {
            warn!("Ignoring site.toml: {}", e);
            Settings::default()
        }
    }
}
