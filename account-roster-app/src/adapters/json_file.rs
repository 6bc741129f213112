//! JSON-file storage adapter.
//!
//! Stores each key as `<base_dir>/<key>.json`. The roster persists one key,
//! so a store directory holds a single `accounts.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use account_roster_core::error::{StoreError, StoreResult};
use account_roster_core::traits::StateStore;

/// Default data directory for the roster.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("account-roster")
}

/// `StateStore` backed by one JSON file per key.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    fn ensure_base_dir(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.base_dir).map_err(|e| StoreError::Storage(e.to_string()))
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.file_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Storage(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.ensure_base_dir()?;
        fs::write(self.file_path(key), value).map_err(|e| StoreError::Storage(e.to_string()))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Storage(e.to_string())),
        }
    }
}
