use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, resolve_base, state_dir_in, write_atomic},
    errors::Result,
};

use super::KeyValueStore;

const RECORD_EXTENSION: &str = "json";

/// Stores each key as `<key>.json` under a state directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens the store under `base/state`, or under the application data
    /// directory when `base` is `None`.
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let root = state_dir_in(&resolve_base(base));
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), RECORD_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key);
        write_atomic(&path, value)?;
        tracing::debug!(path = %path.display(), "wrote tracker record");
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let cleaned: String = key
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "record".into()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(store.read("absent").unwrap().is_none());
    }

    #[test]
    fn write_then_read_returns_same_text() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(Some(dir.path().to_path_buf())).unwrap();
        store.write("zzz_tracker_data", "{\"polychromes\":5}").unwrap();
        assert_eq!(
            store.read("zzz_tracker_data").unwrap().as_deref(),
            Some("{\"polychromes\":5}")
        );
        assert!(store.record_path("zzz_tracker_data").ends_with("state/zzz_tracker_data.json"));
    }

    #[test]
    fn keys_cannot_escape_the_state_dir() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(Some(dir.path().to_path_buf())).unwrap();
        let path = store.record_path("../outside");
        assert_eq!(path.parent(), Some(store.root()));
    }
}
