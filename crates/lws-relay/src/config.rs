//! Relay endpoint configuration

use lws_core::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

/// Public Web3Forms submission endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// `[relay]` section of `site.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayConfig {
    /// Where submissions are POSTed. Point this at a proxy to keep the
    /// access key off the client.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Relay credential sent as `access_key`; empty means "let the proxy add it"
    #[serde(default)]
    pub access_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_key: String::new(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl RelayConfig {
    /// Parse and check the endpoint. Only absolute http(s) URLs are accepted.
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(self.endpoint.trim()).map_err(|e| {
            Error::config_invalid(format!("relay endpoint {:?}: {}", self.endpoint, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::config_invalid(format!(
                "relay endpoint must use http or https, got {other:?}"
            ))),
        }
    }

    /// The key to embed in payloads, if any
    pub fn access_key(&self) -> Option<&str> {
        let key = self.access_key.trim();
        (!key.is_empty()).then_some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_web3forms() {
        let config = RelayConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.access_key(), None);
        assert!(config.endpoint_url().is_ok());
    }

    #[test]
    fn test_endpoint_must_be_absolute_http() {
        let mut config = RelayConfig::default();

        config.endpoint = "/api/contact".into();
        assert!(matches!(
            config.endpoint_url(),
            Err(Error::ConfigInvalid { .. })
        ));

        config.endpoint = "ftp://relay.example.com/submit".into();
        assert!(config.endpoint_url().is_err());

        config.endpoint = " http://localhost:8787/contact ".into();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://localhost:8787/contact"
        );
    }

    #[test]
    fn test_blank_access_key_is_absent() {
        let config = RelayConfig {
            access_key: "   ".into(),
            ..Default::default()
        };
        assert_eq!(config.access_key(), None);

        let config = RelayConfig {
            access_key: "abc-123".into(),
            ..Default::default()
        };
        assert_eq!(config.access_key(), Some("abc-123"));
    }
}
