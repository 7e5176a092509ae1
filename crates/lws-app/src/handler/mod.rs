//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `view`: Navigation and theme handlers
//! - `contact`: Contact form state machine handlers

pub(crate) mod contact;
pub(crate) mod update;
pub(crate) mod view;


use lws_core::{ContactPayload, Theme};

// Re-export main entry point
pub use update::update;

/// Actions that the host should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),

    /// Write the theme preference to the store (fire-and-forget)
    PersistTheme { theme: Theme },
}

/// Background tasks to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Post the contact form to the relay; resolves to `Message::SubmissionResolved`
    SubmitContact { payload: ContactPayload },
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional action for the host to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
        }
    }
}
