//! Process-local storage adapter.

use std::collections::HashMap;
use std::sync::Mutex;

use account_roster_core::error::{StoreError, StoreResult};
use account_roster_core::traits::StateStore;

/// `StateStore` backed by an in-process map.
///
/// Nothing survives the process; intended for tests and for frontends that
/// own persistence some other way.
#[derive(Default)]
pub struct MemoryStateStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        values.remove(key);
        Ok(())
    }
}
