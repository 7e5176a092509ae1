//! lws-app - Application state and orchestration for the Lokhand Wala Web Solutions site
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction that owns state and preferences, configuration loading,
//! and the background task that talks to the form relay.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod message;
pub mod preferences;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{Task, UpdateAction, UpdateResult};
pub use message::{Message, SubmissionOutcome};
pub use preferences::{MemoryStore, PreferenceStore};
pub use state::{AppState, ContactFormState, FormPhase, ViewState};
