//! Error types for category table and render parameter validation.

use thiserror::Error;

/// Errors raised while building or loading a category table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table has no entries.
    #[error("category table is empty")]
    Empty,

    /// Two entries share the same category name.
    #[error("duplicate category name: '{0}'")]
    DuplicateName(String),

    /// The category name cannot be used as a filename stem.
    #[error("invalid category name '{0}': expected lowercase letters, digits, '_' or '-'")]
    InvalidName(String),

    /// The emoji field is empty or whitespace only.
    #[error("category '{0}' has an empty emoji")]
    EmptyEmoji(String),

    /// The color field is not a `#RRGGBB` hex string.
    #[error("category '{0}' has invalid color '{1}': expected #RRGGBB")]
    InvalidColor(String, String),

    /// A render parameter is out of range.
    #[error("invalid render parameter: {0}")]
    InvalidParameter(String),

    /// The table file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
