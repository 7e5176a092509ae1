//! Relay response body

use lws_core::prelude::*;
use serde::Deserialize;
use serde_json::Value;

/// The part of the relay's JSON answer we look at.
///
/// A body without `success` counts as a rejection, not a decode error.
/// Only `success` decides the outcome. `message` is kept as raw JSON so an
/// unexpected shape there never turns an accepted submission into an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,

    /// Relay's own explanation; logged, never shown to visitors
    #[serde(default)]
    pub message: Option<Value>,
}

impl RelayResponse {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::decode(e.to_string()))
    }

    /// The relay's message as text, whatever JSON type it came in as
    pub fn reason(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Turn a refusal into [`Error::Rejected`]
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            let reason = self.reason().unwrap_or_else(|| "no reason given".to_string());
            Err(Error::rejected(reason))
        }
    }
}
