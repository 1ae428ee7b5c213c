//! Typed load/save over raw storage.
//!
//! `load` never errors outward: a missing key, a parse failure, or a storage
//! failure all log and return the caller's default, so a corrupt value can at
//! worst revert one setting. `set` is write-through best-effort -- the caller
//! keeps its in-memory value regardless of whether the write landed.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::PrefStorage;

/// Typed preference access over a [`PrefStorage`] backend.
#[derive(Debug)]
pub struct PrefStore<S: PrefStorage> {
    storage: S,
}

impl<S: PrefStorage> PrefStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read and deserialize the value for `key`, falling back to `default`
    /// on absence or any failure.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                log::warn!("prefs: read '{key}' failed ({e}), using default");
                return default;
            },
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("prefs: value for '{key}' is corrupt ({e}), using default");
                default
            },
        }
    }

    /// Serialize and write `value` under `key`. Failures are logged and
    /// swallowed; persistence is best-effort.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("prefs: serialize '{key}' failed: {e}");
                return;
            },
        };
        if let Err(e) = self.storage.write(key, &raw) {
            log::warn!("prefs: write '{key}' failed ({e}), keeping in-memory value");
        }
    }

    /// Write a pre-built JSON value (used for non-preference payloads such
    /// as saved calendar events).
    pub fn set_json(&mut self, key: &str, value: &serde_json::Value) {
        self.set(key, value);
    }

    /// Access the underlying storage (tests and the simulator).
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn missing_key_returns_default() {
        let store = PrefStore::new(MemoryStorage::new());
        let theme: String = store.load("app-theme", "dark".to_string());
        assert_eq!(theme, "dark");
    }

    #[test]
    fn corrupt_value_returns_default() {
        let mut storage = MemoryStorage::new();
        storage.seed("app-theme", "{not json!");
        let store = PrefStore::new(storage);
        let theme: String = store.load("app-theme", "dark".to_string());
        assert_eq!(theme, "dark");
    }

    #[test]
    fn wrong_type_returns_default() {
        let mut storage = MemoryStorage::new();
        storage.seed("app-font-size", "12345");
        let store = PrefStore::new(storage);
        let size: String = store.load("app-font-size", "base".to_string());
        assert_eq!(size, "base");
    }

    #[test]
    fn set_then_load_roundtrip() {
        let mut store = PrefStore::new(MemoryStorage::new());
        store.set("app-theme", &"light");
        let theme: String = store.load("app-theme", "dark".to_string());
        assert_eq!(theme, "light");
    }

    #[test]
    fn values_are_json_encoded() {
        let mut store = PrefStore::new(MemoryStorage::new());
        store.set("app-theme", &"light");
        assert_eq!(
            store.storage().read("app-theme").unwrap().as_deref(),
            Some("\"light\"")
        );
    }

    #[test]
    fn set_json_stores_structured_value() {
        let mut store = PrefStore::new(MemoryStorage::new());
        let value = serde_json::json!({"2024-6-15": [{"time": "12:00", "title": "Picnic"}]});
        store.set_json("calendar-events", &value);
        let back: serde_json::Value = store.load("calendar-events", serde_json::json!({}));
        assert_eq!(back["2024-6-15"][0]["title"], "Picnic");
    }

    #[test]
    fn invalid_key_write_is_swallowed() {
        let mut store = PrefStore::new(MemoryStorage::new());
        // Invalid key: the backend rejects it; set() logs and continues.
        store.set("bad key", &"value");
        assert!(store.storage().is_empty());
    }
}
