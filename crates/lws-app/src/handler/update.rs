//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{contact, view, UpdateResult};

/// Process a message and update state
/// Returns an optional action for the host
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // View Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(page) => view::handle_navigate(state, page),
        Message::ToggleTheme => view::handle_toggle_theme(state),

        // ─────────────────────────────────────────────────────────
        // Contact Form Messages
        // ─────────────────────────────────────────────────────────
        Message::UpdateField { field, value } => contact::handle_update_field(state, field, value),
        Message::SubmitContact => contact::handle_submit(state),
        Message::SubmissionResolved(outcome) => contact::handle_resolved(state, outcome),
    }
}
