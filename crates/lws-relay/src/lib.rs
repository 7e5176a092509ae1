//! lws-relay - Form relay client for the Lokhand Wala Web Solutions site
//!
//! Sends the contact form to a Web3Forms-compatible endpoint (or a proxy in
//! front of one) and reads back the `success` flag. Works on native targets
//! and in the browser, where reqwest goes through `fetch`.

pub mod client;
pub mod config;
pub mod response;

use lws_core::{ContactPayload, Result};

pub use client::RelayClient;
pub use config::{RelayConfig, DEFAULT_ENDPOINT};
pub use response::RelayResponse;

/// Something that can deliver a contact payload.
///
/// Browser futures are not `Send`, so the front end uses
/// [`LocalFormRelay`]; native hosts can require [`FormRelay`].
#[trait_variant::make(FormRelay: Send)]
pub trait LocalFormRelay {
    /// Deliver one payload. Transport and decoding problems are errors;
    /// a relay that answers `success: false` is an `Ok` response.
    async fn submit(&self, payload: &ContactPayload) -> Result<RelayResponse>;
}
