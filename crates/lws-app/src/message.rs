//! Message types for the application (TEA pattern)

use lws_core::{ContactField, Page};

/// How the relay round-trip ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Relay answered `success: true`
    Accepted,
    /// Relay answered but refused; `reason` is the relay's own message
    Rejected { reason: Option<String> },
    /// Relay unreachable or answered something unreadable
    Failed { reason: String },
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // View Messages
    // ─────────────────────────────────────────────────────────
    /// Show a page
    Navigate(Page),
    /// Flip between light and dark mode
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Contact Form Messages
    // ─────────────────────────────────────────────────────────
    /// Visitor typed into one of the inputs
    UpdateField { field: ContactField, value: String },
    /// Visitor pressed "Send Message"
    SubmitContact,
    /// The relay task finished
    SubmissionResolved(SubmissionOutcome),
}
