//! Unified error type definition.

use serde::Serialize;
use thiserror::Error;

/// Error type shared by the store and its storage adapters.
///
/// Persistence failures never reach the UI as errors: `persist` and
/// `rehydrate` log and swallow them. The variants exist for the storage
/// seam and for construction-time wiring mistakes.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum StoreError {
    /// Storage medium rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Collection blob could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid wiring at construction time (missing adapter, etc).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
