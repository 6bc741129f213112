//! Storage medium abstraction.

use crate::error::StoreResult;

/// Synchronous key-value storage seam.
///
/// The store persists the whole collection as one value under a fixed key;
/// adapters only need to move opaque strings. Operations are expected to be
/// fast and local, succeeding or failing immediately.
///
/// Adapter implementations (account-roster-app):
/// - `MemoryStateStore` — process-local map
/// - `JsonFileStore` — one JSON file per key
pub trait StateStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the value under `key`; an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
