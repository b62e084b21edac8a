use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use polychrome_core::{
    config::ConfigManager,
    storage::{JsonFileStore, TrackerStore},
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique base directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a file-backed tracker store and config manager in an isolated directory.
#[allow(dead_code)]
pub fn setup_test_env() -> (TrackerStore, ConfigManager, PathBuf) {
    let base = temp_base();
    let config = ConfigManager::with_base_dir(base.clone()).expect("create config manager");
    let settings = config.load().expect("load config");
    let backend = JsonFileStore::new(Some(base.clone())).expect("create json store");
    let store = TrackerStore::open_with_config(Box::new(backend), &settings);
    (store, config, base)
}
