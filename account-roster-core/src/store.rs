//! The account store: canonical collection, validation authority,
//! persistence trigger.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::traits::{StateStore, StoreObserver};
use crate::types::{Account, AccountType, FieldErrors, UpdateAccountRequest};

/// Fixed storage key for the serialized collection.
pub const ACCOUNTS_KEY: &str = "accounts";

/// Single source of truth for the account collection.
///
/// Every mutating operation ends with an explicit [`persist`](Self::persist)
/// followed by observer notification. Persistence is fire-and-forget: a
/// failure is logged and swallowed, and the in-memory collection stays
/// authoritative.
pub struct AccountStore {
    accounts: Vec<Account>,
    storage: Arc<dyn StateStore>,
    observers: Vec<Arc<dyn StoreObserver>>,
}

impl AccountStore {
    /// Creates an empty store over the given storage adapter.
    ///
    /// Call [`rehydrate`](Self::rehydrate) once at startup to load any
    /// previously persisted collection.
    #[must_use]
    pub fn new(storage: Arc<dyn StateStore>) -> Self {
        Self {
            accounts: Vec::new(),
            storage,
            observers: Vec::new(),
        }
    }

    /// Registers a change observer.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    // ===== Read access =====

    /// The current collection, in insertion order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Number of accounts in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    // ===== Mutations =====

    /// Appends a new blank local account in edit mode and returns its id.
    ///
    /// The new record starts invalid (empty login) but with zeroed error
    /// flags, so the UI shows no red fields until the user actually edits.
    pub fn create(&mut self) -> String {
        let now = Utc::now();
        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            labels: Vec::new(),
            kind: AccountType::Local,
            login: String::new(),
            password: Some(String::new()),
            is_valid: false,
            errors: FieldErrors::default(),
            edit_mode: true,
            created_at: now,
            updated_at: now,
        };
        let id = account.id.clone();
        self.accounts.push(account);
        self.after_mutation();
        id
    }

    /// Applies `request` to the matching account, then re-validates it.
    ///
    /// Returns `false` (and changes nothing) when no account matches.
    /// Switching the type to LDAP drops any stored password.
    pub fn update(&mut self, id: &str, request: UpdateAccountRequest) -> bool {
        let Some(account) = self.accounts.iter_mut().find(|a| a.id == id) else {
            return false;
        };

        if let Some(labels) = request.labels {
            account.labels = labels;
        }
        if let Some(kind) = request.kind {
            account.kind = kind;
        }
        if let Some(login) = request.login {
            account.login = login;
        }
        if let Some(password) = request.password {
            account.password = Some(password);
        }
        // LDAP accounts carry no password.
        if account.kind == AccountType::Ldap {
            account.password = None;
        }

        account.validate();
        account.updated_at = Utc::now();
        self.after_mutation();
        true
    }

    /// Removes the matching account permanently. Absent ids are a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|account| account.id != id);
        if self.accounts.len() == before {
            return false;
        }
        self.after_mutation();
        true
    }

    /// Sets the transient edit flag on the matching account.
    ///
    /// Has no bearing on validity; carried in the record purely for the UI.
    pub fn set_edit_mode(&mut self, id: &str, edit_mode: bool) -> bool {
        let Some(account) = self.accounts.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        account.edit_mode = edit_mode;
        self.after_mutation();
        true
    }

    // ===== Persistence =====

    /// Serializes the whole collection under [`ACCOUNTS_KEY`].
    ///
    /// Failures are logged and swallowed, without retry: the in-memory
    /// collection is the source of truth regardless.
    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            log::error!("Failed to persist accounts: {e}");
        }
    }

    fn try_persist(&self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.accounts)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.storage.set(ACCOUNTS_KEY, &blob)
    }

    /// Reconstructs the collection from storage.
    ///
    /// An absent key leaves the collection empty. Every recovered account is
    /// taken out of edit mode, its error flags are zeroed, and it is
    /// re-validated: persisted derived state is never trusted. Unreadable or
    /// malformed content is logged and resets the collection to empty.
    pub fn rehydrate(&mut self) {
        match self.try_rehydrate() {
            Ok(Some(count)) => {
                log::info!("Rehydrated {count} account(s)");
                self.notify();
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to rehydrate accounts, starting empty: {e}");
                let had_accounts = !self.accounts.is_empty();
                self.accounts.clear();
                if had_accounts {
                    self.notify();
                }
            }
        }
    }

    fn try_rehydrate(&mut self) -> StoreResult<Option<usize>> {
        let Some(blob) = self.storage.get(ACCOUNTS_KEY)? else {
            return Ok(None);
        };

        let mut accounts: Vec<Account> = serde_json::from_str(&blob)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        for account in &mut accounts {
            account.edit_mode = false;
            account.errors.clear();
            account.validate();
        }

        let count = accounts.len();
        self.accounts = accounts;
        Ok(Some(count))
    }

    fn after_mutation(&self) {
        self.persist();
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_change(&self.accounts);
        }
    }
}
