//! Application bootstrap for the account roster.
//!
//! Provides `AppState` (the wired store), `AppStateBuilder` (adapter
//! injection), and the storage adapters under [`adapters`]. A frontend
//! injects an adapter, registers its observers, builds the state, and runs
//! the startup sequence once.

pub mod adapters;

use std::sync::Arc;

use account_roster_core::error::{StoreError, StoreResult};
use account_roster_core::traits::{StateStore, StoreObserver};
use account_roster_core::AccountStore;

/// Application state: the account store wired to its storage adapter.
///
/// Constructed once at startup via [`AppStateBuilder`].
pub struct AppState {
    /// The canonical account store.
    pub store: AccountStore,
}

impl AppState {
    /// Runs the one-time startup sequence: rehydrate the collection from
    /// storage. Failures are handled inside the store (logged, collection
    /// reset), so this never fails.
    pub fn run_startup(&mut self) {
        self.store.rehydrate();
        log::info!("Account store ready with {} account(s)", self.store.len());
    }
}

/// Builder for constructing [`AppState`] with platform-specific adapters.
///
/// # Required
/// - `storage` — how the collection is persisted
///
/// # Optional
/// - `observer` — change callbacks registered before the first mutation
#[derive(Default)]
pub struct AppStateBuilder {
    storage: Option<Arc<dyn StateStore>>,
    observers: Vec<Arc<dyn StoreObserver>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn storage(mut self, storage: Arc<dyn StateStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn StoreObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Builds the `AppState`.
    ///
    /// # Errors
    /// Returns `StoreError::Configuration` if no storage adapter was set.
    pub fn build(self) -> StoreResult<AppState> {
        let storage = self
            .storage
            .ok_or_else(|| StoreError::Configuration("storage adapter is required".to_string()))?;

        let mut store = AccountStore::new(storage);
        for observer in self.observers {
            store.subscribe(observer);
        }

        Ok(AppState { store })
    }
}
