//! Type definitions.

mod account;
mod label;

pub use account::{Account, AccountType, FieldErrors, UpdateAccountRequest};
pub use label::{format_labels, parse_label_input, Label};
