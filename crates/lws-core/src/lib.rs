//! # lws-core - Core Domain Types
//!
//! Foundation crate for the Lokhand Wala Web Solutions site. Provides the
//! page and theme enums, the contact form domain types, the site copy and
//! the shared error type.
//!
//! This crate has **zero internal dependencies** and compiles for both native
//! targets and `wasm32-unknown-unknown`.
//!
//! ## Public API
//!
//! ### Navigation (`page`)
//! - [`Page`] - The four top-level pages, with slug parsing that falls back to Home
//!
//! ### Presentation (`theme`)
//! - [`Theme`] - Light/dark theme and its `"true"`/`"false"` persisted encoding
//!
//! ### Contact Form (`contact`)
//! - [`ContactDraft`], [`ContactField`] - Editable form values
//! - [`ContactPayload`] - JSON body for the form relay
//! - [`SubmissionStatus`] - Banner state for the latest attempt
//!
//! ### Copy (`content`)
//! - [`content::render`] - Page to heading block, plus the per-page lists
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant per failure the visitor can hit
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod contact;
pub mod content;
pub mod error;
pub mod page;
pub mod theme;

/// Prelude for common imports used throughout all site crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, info, warn};
}

pub use contact::{
    validation_message, ContactDraft, ContactField, ContactPayload, SubmissionStatus,
    NETWORK_ERROR_MESSAGE, REJECTED_MESSAGE, SUCCESS_MESSAGE,
};
pub use content::PageContent;
pub use error::{Error, Result};
pub use page::Page;
pub use theme::{Theme, DARK_MODE_CLASS, DEFAULT_THEME_KEY};
