pub mod json_backend;
pub mod memory;
pub mod tracker_store;

use crate::errors::Result;

/// Key under which the tracker record is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "zzz_tracker_data";

/// Opaque string key-value persistence, e.g. a directory of JSON files or
/// browser local storage behind an embedding layer.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing has been stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
pub use tracker_store::TrackerStore;
