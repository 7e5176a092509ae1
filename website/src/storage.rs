//! `localStorage`-backed preference store

use lws_app::PreferenceStore;
use lws_core::{Error, Result};
use web_sys::Storage;

/// Zero-sized handle; every call looks storage up again so a visitor who
/// blocks site data just gets defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| Error::storage("no window"))?
            .local_storage()
            .map_err(|e| Error::storage(format!("localStorage access denied: {:?}", e)))?
            .ok_or_else(|| Error::storage("localStorage unavailable"))
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Error::storage(format!("could not write {key}: {:?}", e)))
    }
}
