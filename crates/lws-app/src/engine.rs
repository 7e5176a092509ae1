//! Engine - owns the TEA state and its synchronous side effects
//!
//! The front end holds one `Engine`, sends every UI event through
//! [`Engine::process_message`], and spawns whatever [`Task`] comes back.
//! Theme persistence happens inline; the relay call is the only thing the
//! host has to await.

use lws_core::prelude::*;
use lws_core::Theme;

use crate::config::Settings;
use crate::handler::{update, Task, UpdateAction};
use crate::message::Message;
use crate::preferences::{load_theme, persist_theme, PreferenceStore};
use crate::state::AppState;

/// Orchestration engine for the site.
///
/// Encapsulates:
/// - TEA state management
/// - The preference store
/// - Settings (via `state.settings`)
pub struct Engine<S: PreferenceStore> {
    /// TEA application state (the Model)
    pub state: AppState,

    store: S,
}

impl<S: PreferenceStore> Engine<S> {
    /// Create the engine, reading the persisted theme once
    pub fn new(store: S, settings: Settings) -> Self {
        let theme = load_theme(&store, &settings.preferences.theme_key);
        info!("Site starting (theme: {:?})", theme);

        Self {
            state: AppState::with_settings(settings, theme),
            store,
        }
    }

    /// Process a message and perform its synchronous actions.
    ///
    /// Returns the background task the host must run, if any.
    pub fn process_message(&mut self, message: Message) -> Option<Task> {
        let result = update(&mut self.state, message);
        result.action.and_then(|action| self.handle_action(action))
    }

    fn handle_action(&mut self, action: UpdateAction) -> Option<Task> {
        match action {
            UpdateAction::PersistTheme { theme } => {
                self.persist(theme);
                None
            }
            UpdateAction::SpawnTask(task) => Some(task),
        }
    }

    fn persist(&mut self, theme: Theme) {
        let key = &self.state.settings.preferences.theme_key;
        persist_theme(&mut self.store, key, theme);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
