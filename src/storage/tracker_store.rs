use crate::{
    config::Config,
    errors::Result,
    ledger::{FieldUpdate, TrackerState},
};

use super::{KeyValueStore, DEFAULT_STORAGE_KEY};

/// Owns the session's tracker record: loaded once when opened and rewritten
/// in full after every field edit.
pub struct TrackerStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
    state: TrackerState,
}

impl TrackerStore {
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        Self::open_with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Opens the record named by `config.storage_key`.
    pub fn open_with_config(backend: Box<dyn KeyValueStore>, config: &Config) -> Self {
        Self::open_with_key(backend, config.storage_key.as_str())
    }

    /// Loads the record stored under `key`. A missing, unreadable or
    /// unparseable record yields the defaults instead of an error.
    pub fn open_with_key(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = load_state(backend.as_ref(), &key);
        tracing::info!(key = %key, "tracker store opened");
        Self {
            backend,
            key,
            state,
        }
    }

    pub fn get(&self) -> &TrackerState {
        &self.state
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Applies one edit and persists the whole record. The edit is kept in
    /// memory even when the write fails.
    pub fn update(&mut self, update: FieldUpdate) -> Result<()> {
        self.state.apply(update);
        tracing::debug!(field = update.key(), "tracker field updated");
        self.save()
    }

    /// Parses raw input for `field` and applies it.
    pub fn update_field(&mut self, field: &str, raw: &str) -> Result<()> {
        let update = FieldUpdate::parse(field, raw)?;
        self.update(update)
    }

    /// Restores the defaults and persists them.
    pub fn reset(&mut self) -> Result<()> {
        self.state = TrackerState::default();
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.state)?;
        self.backend.write(&self.key, &json).inspect_err(|err| {
            tracing::error!(key = %self.key, error = %err, "failed to persist tracker record");
        })
    }
}

fn load_state(backend: &dyn KeyValueStore, key: &str) -> TrackerState {
    match backend.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(key, error = %err, "tracker record unreadable, using defaults");
                TrackerState::default()
            }
        },
        Ok(None) => TrackerState::default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "tracker store read failed, using defaults");
            TrackerState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ledger::PitySelection, storage::MemoryStore};

    #[test]
    fn empty_backend_opens_with_defaults() {
        let store = TrackerStore::open(Box::new(MemoryStore::new()));
        assert_eq!(store.get(), &TrackerState::default());
        assert_eq!(store.key(), DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn corrupted_record_degrades_to_defaults() {
        let backend = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "{not json");
        let store = TrackerStore::open(Box::new(backend));
        assert_eq!(store.get(), &TrackerState::default());
    }

    #[test]
    fn update_field_rejects_bad_input_without_touching_state() {
        let mut store = TrackerStore::open(Box::new(MemoryStore::new()));
        assert!(store.update_field("is_pity", "Maybe").is_err());
        assert_eq!(store.get().is_pity, PitySelection::No);

        store.update_field("is_pity", "Yes").expect("valid edit");
        assert_eq!(store.get().is_pity, PitySelection::Yes);
    }

    #[test]
    fn configured_key_selects_the_record() {
        let backend = MemoryStore::with_entry("alt_profile", "{\"polychromes\":480}");
        let config = Config {
            storage_key: "alt_profile".into(),
            ..Config::default()
        };
        let store = TrackerStore::open_with_config(Box::new(backend), &config);
        assert_eq!(store.key(), "alt_profile");
        assert_eq!(store.get().ledger.polychromes, 480);
    }
}
