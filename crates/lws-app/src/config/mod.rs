//! Site configuration
//!
//! Supports a single `site.toml` with `[relay]` and `[preferences]` sections.
//! The browser build embeds the file at compile time, so loading works on
//! the file's text rather than on a path.

pub mod settings;
pub mod types;

pub use settings::{load_settings, parse_settings};
pub use types::*;
