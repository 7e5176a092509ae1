//! Reactive handle on the engine, shared through context
//!
//! Components read state through memos and send [`Message`]s through
//! [`Site::send`]. Submission tasks run on the browser's event loop and feed
//! their result back in the same way.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lws_app::actions::run_task;
use lws_app::config::load_settings;
use lws_app::{ContactFormState, Engine, Message, SubmissionOutcome, Task};
use lws_core::prelude::{info, warn};
use lws_core::{Page, Theme};
use lws_relay::{RelayClient, RelayConfig};

use crate::storage::BrowserStore;

const SITE_CONFIG: &str = include_str!("../site.toml");

#[derive(Clone, Copy)]
pub struct Site {
    engine: RwSignal<Engine<BrowserStore>>,
    relay: StoredValue<RelayConfig>,
}

impl Site {
    pub fn new() -> Self {
        let settings = load_settings(SITE_CONFIG);
        let relay = StoredValue::new(settings.relay.clone());

        Self {
            engine: RwSignal::new(Engine::new(BrowserStore, settings)),
            relay,
        }
    }

    pub fn current_page(self) -> Memo<Page> {
        Memo::new(move |_| self.engine.with(|engine| engine.state.current_page()))
    }

    pub fn theme(self) -> Memo<Theme> {
        Memo::new(move |_| self.engine.with(|engine| engine.state.theme()))
    }

    pub fn contact(self) -> Memo<ContactFormState> {
        Memo::new(move |_| self.engine.with(|engine| engine.state.contact.clone()))
    }

    /// Feed a message through the engine and spawn any task it returns
    pub fn send(self, message: Message) {
        let mut task = None;
        self.engine
            .update(|engine| task = engine.process_message(message));

        if let Some(task) = task {
            self.spawn(task);
        }
    }

    fn spawn(self, task: Task) {
        let config = self.relay.get_value();

        spawn_local(async move {
            let message = match RelayClient::new(&config) {
                Ok(client) => {
                    info!("Posting contact form to {}", client.endpoint());
                    run_task(&client, task).await
                }
                Err(e) => {
                    warn!("Relay client unavailable: {}", e);
                    Message::SubmissionResolved(SubmissionOutcome::Failed {
                        reason: e.to_string(),
                    })
                }
            };
            self.send(message);
        });
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

/// Location fragment, including the leading `#` when present
pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}
