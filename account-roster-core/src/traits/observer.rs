//! Change-notification seam for UI collaborators.

use crate::types::Account;

/// Callback hooks fired by the store after each mutation.
///
/// The hook defaults to a no-op; implement it to re-render, mirror state,
/// or record changes. The slice reflects the post-mutation collection.
pub trait StoreObserver: Send + Sync {
    /// Called after the collection changed (create, update, delete,
    /// edit-mode toggle, or a rehydration that replaced the contents).
    fn on_change(&self, _accounts: &[Account]) {}
}
