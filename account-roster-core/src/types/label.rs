//! Account labels and their `;`-delimited input format.

use serde::{Deserialize, Serialize};

/// A single free-form label attached to an account.
///
/// Label order is display-relevant but carries no further meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label text, already trimmed.
    pub text: String,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Splits raw `;`-delimited input into labels.
///
/// Each piece is trimmed and empty pieces are dropped; input order is
/// preserved. Empty or whitespace-only input yields no labels.
#[must_use]
pub fn parse_label_input(raw: &str) -> Vec<Label> {
    raw.split(';')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(Label::new)
        .collect()
}

/// Joins labels back into `;`-delimited form, without a trailing delimiter.
///
/// Not an exact inverse of [`parse_label_input`]: whitespace and empty
/// segments are normalized away during parsing, so
/// `format_labels(&parse_label_input(s))` may differ from `s`.
#[must_use]
pub fn format_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| label.text.as_str())
        .collect::<Vec<_>>()
        .join(";")
}
