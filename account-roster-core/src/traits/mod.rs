//! Seam trait definitions: storage medium and change notification.

mod observer;
mod state_store;

pub use observer::StoreObserver;
pub use state_store::StateStore;
