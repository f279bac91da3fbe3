//! Persistence: a string-keyed store of serialized records plus the typed
//! state layer that merges loads over defaults and never fails the caller.

pub mod json_backend;

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Expense, Settings, SpeechEntry};
use crate::errors::StoreError;

pub use json_backend::JsonFileStore;

pub const SETTINGS_KEY: &str = "settings";
pub const EXPENSES_KEY: &str = "expenses";
pub const SPEECHES_KEY: &str = "speeches";

/// Abstraction over string-keyed persistence backends. Last writer wins;
/// there is no coordination between concurrent writers.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Typed persistence for the application state.
///
/// Loads merge persisted fields over hardcoded defaults and fall back to the
/// defaults entirely when the stored payload is missing or corrupt; they never
/// surface an error. Saves propagate errors so callers can decide whether to
/// care.
pub struct StateStore {
    backend: Box<dyn KeyValueStore>,
}

impl StateStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn load_settings(&self) -> Settings {
        self.load_or_default(SETTINGS_KEY)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.save_value(SETTINGS_KEY, settings)
    }

    pub fn load_expenses(&self) -> Vec<Expense> {
        self.load_or_default(EXPENSES_KEY)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<(), StoreError> {
        self.save_value(EXPENSES_KEY, &expenses)
    }

    pub fn load_speeches(&self) -> Vec<SpeechEntry> {
        self.load_or_default(SPEECHES_KEY)
    }

    pub fn save_speeches(&self, speeches: &[SpeechEntry]) -> Result<(), StoreError> {
        self.save_value(SPEECHES_KEY, &speeches)
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                tracing::warn!(key, %err, "failed to read persisted state; using defaults");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "discarding malformed persisted state");
                T::default()
            }
        }
    }

    fn save_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;
        self.backend.put(key, &json)
    }
}

/// Volatile in-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .read()
            .map(|map| map.get(key).cloned())
            .unwrap_or_default())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Ok(mut map) = self.entries.write() {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_load_as_defaults() {
        let store = StateStore::new(Box::new(MemoryStore::new()));
        let settings = store.load_settings();
        assert_eq!(settings.weekly_budget, Settings::default_weekly_budget());
        assert!(store.load_expenses().is_empty());
    }

    #[test]
    fn corrupt_payload_falls_back_to_defaults() {
        let backend = MemoryStore::new();
        backend.put(SETTINGS_KEY, "{not json").unwrap();
        backend.put(EXPENSES_KEY, "[1, 2, ").unwrap();
        let store = StateStore::new(Box::new(backend));
        assert_eq!(
            store.load_settings().weekly_budget,
            Settings::default_weekly_budget()
        );
        assert!(store.load_expenses().is_empty());
    }

    #[test]
    fn settings_round_trip_through_backend() {
        let store = StateStore::new(Box::new(MemoryStore::new()));
        let mut settings = Settings::default();
        settings.weekly_budget = 72.5;
        settings.week_start = 3;
        store.save_settings(&settings).unwrap();
        let loaded = store.load_settings();
        assert_eq!(loaded.weekly_budget, 72.5);
        assert_eq!(loaded.week_start, 3);
    }
}
