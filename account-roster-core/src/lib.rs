//! Account roster core library.
//!
//! Owns the canonical collection of authentication account records and every
//! rule around it: field validation, label input parsing, and whole-collection
//! persistence to an injected key-value medium.
//!
//! This library is platform-independent. UI layers consume [`AccountStore`],
//! implement [`StateStore`] for their storage medium (or use an adapter from
//! `account-roster-app`), and register [`StoreObserver`] callbacks to react
//! to mutations.

pub mod error;
pub mod store;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{StoreError, StoreResult};
pub use store::{AccountStore, ACCOUNTS_KEY};
pub use traits::{StateStore, StoreObserver};
