//! Account record types and field validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Label;

/// How an account authenticates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountType {
    /// Directory-backed account; no password is stored for it.
    #[serde(rename = "LDAP")]
    Ldap,
    /// Local account with its own password.
    #[serde(rename = "Local")]
    Local,
}

impl AccountType {
    /// All selectable types, in UI display order.
    pub const ALL: [Self; 2] = [Self::Ldap, Self::Local];
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ldap => write!(f, "LDAP"),
            Self::Local => write!(f, "Local"),
        }
    }
}

/// Per-field validation flags, recomputed by [`Account::validate`].
///
/// These are continuous display state for the UI, not failures.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldErrors {
    /// Login is empty after trimming.
    #[serde(default)]
    pub login: bool,
    /// Password is required (local account) but absent or blank.
    #[serde(default)]
    pub password: bool,
}

impl FieldErrors {
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A single authentication account record.
///
/// Serialized whole, camelCase. The derived fields (`isValid`, `errors`,
/// `editMode`) do land in storage but are discarded and recomputed on
/// rehydration; they deserialize to defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account ID (UUID), immutable once created, never reused.
    pub id: String,
    /// Display labels, ordered; may be empty.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Account type.
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// Login name.
    pub login: String,
    /// Password; only meaningful for local accounts, `None` for LDAP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Derived validity; never trusted from storage.
    #[serde(default)]
    pub is_valid: bool,
    /// Derived per-field flags; never trusted from storage.
    #[serde(default)]
    pub errors: FieldErrors,
    /// Transient UI flag; always `false` after rehydration.
    #[serde(default)]
    pub edit_mode: bool,
    /// Creation time.
    #[serde(default = "Utc::now", with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    #[serde(default = "Utc::now", with = "crate::utils::datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Recomputes `errors` and `is_valid` from the current `login`,
    /// `password` and `kind`, and returns the resulting validity.
    ///
    /// An LDAP account is never flagged for a missing password.
    pub fn validate(&mut self) -> bool {
        self.errors.login = self.login.trim().is_empty();
        self.errors.password = self.kind == AccountType::Local
            && self.password.as_deref().is_none_or(|p| p.trim().is_empty());
        self.is_valid = !(self.errors.login || self.errors.password);
        self.is_valid
    }
}

/// Field changes applicable to an existing account.
///
/// Enumerates exactly the externally mutable fields; derived state
/// (`is_valid`, `errors`) stays under the store's control, and `edit_mode`
/// has its own setter. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    /// New label set (replaces the whole sequence).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    /// New account type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AccountType>,
    /// New login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// New password. Ignored and cleared when the account ends up LDAP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
