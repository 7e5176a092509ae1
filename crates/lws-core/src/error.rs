//! Application error types with rich context

use thiserror::Error;

use crate::contact::ContactField;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Preference Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Preference storage error: {message}")]
    Storage { message: String },

    // ─────────────────────────────────────────────────────────────
    // Contact Form Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Contact form is incomplete: {}", format_fields(fields))]
    Validation { fields: Vec<ContactField> },

    // ─────────────────────────────────────────────────────────────
    // Form Relay Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Form relay unreachable: {message}")]
    Transport { message: String },

    #[error("Form relay returned an unreadable response: {message}")]
    Decode { message: String },

    #[error("Form relay rejected the submission: {message}")]
    Rejected { message: String },
}

fn format_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn validation(fields: Vec<ContactField>) -> Self {
        Self::Validation { fields }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}
