//! Durable key-value storage for visitor preferences
//!
//! The browser build backs this with `localStorage`; [`MemoryStore`] keeps
//! values for the lifetime of the process.

use std::collections::HashMap;

use lws_core::prelude::*;
use lws_core::Theme;

/// String key-value store that survives restarts
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted theme; anything but `"true"` is light
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Theme {
    let stored = store.get(key);
    let theme = Theme::from_stored(stored.as_deref());
    debug!("Theme preference {:?} -> {:?}", stored, theme);
    theme
}

/// Write the theme preference. Failures are logged and swallowed.
pub fn persist_theme<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, theme: Theme) {
    if let Err(e) = store.set(key, theme.as_stored()) {
        warn!("Failed to persist theme preference: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("darkMode"), None);

        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));
    }

    #[test]
    fn test_load_theme_variants() {
        assert_eq!(load_theme(&MemoryStore::new(), "darkMode"), Theme::Light);
        assert_eq!(
            load_theme(&MemoryStore::with_value("darkMode", "true"), "darkMode"),
            Theme::Dark
        );
        assert_eq!(
            load_theme(&MemoryStore::with_value("darkMode", "false"), "darkMode"),
            Theme::Light
        );
        assert_eq!(
            load_theme(&MemoryStore::with_value("darkMode", "yes"), "darkMode"),
            Theme::Light
        );
        assert_eq!(
            load_theme(&MemoryStore::with_value("other", "true"), "darkMode"),
            Theme::Light
        );
    }

    #[test]
    fn test_persist_theme_writes_stringified_flag() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_set()
            .with(eq("darkMode"), eq("true"))
            .times(1)
            .returning(|_, _| Ok(()));

        persist_theme(&mut store, "darkMode", Theme::Dark);
    }

    #[test]
    fn test_persist_theme_swallows_store_errors() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_set()
            .times(1)
            .returning(|_, _| Err(Error::storage("quota exceeded")));

        persist_theme(&mut store, "darkMode", Theme::Light);
    }
}
