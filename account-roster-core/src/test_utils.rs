//! Test helpers.
//!
//! Provides a configurable mock storage adapter for exercising the
//! swallowed-failure paths.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::traits::StateStore;

/// In-memory `StateStore` with failure injection.
pub struct MockStateStore {
    values: Mutex<HashMap<String, String>>,
    /// If `Some`, every `get` fails with this message.
    read_error: Mutex<Option<String>>,
    /// If `Some`, every `set` fails with this message.
    write_error: Mutex<Option<String>>,
}

impl MockStateStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            read_error: Mutex::new(None),
            write_error: Mutex::new(None),
        }
    }

    /// Pre-seeds a stored value, bypassing error injection.
    pub fn seed(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns the currently stored value, if any.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn set_read_error(&self, err: Option<String>) {
        *self.read_error.lock().unwrap() = err;
    }

    pub fn set_write_error(&self, err: Option<String>) {
        *self.write_error.lock().unwrap() = err;
    }
}

impl StateStore for MockStateStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if let Some(ref msg) = *self.read_error.lock().unwrap() {
            return Err(StoreError::Storage(msg.clone()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(ref msg) = *self.write_error.lock().unwrap() {
            return Err(StoreError::Storage(msg.clone()));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
