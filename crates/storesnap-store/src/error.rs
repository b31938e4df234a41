//! Error types for store backends.

use storesnap_model::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading or reading a concrete store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while reading a store description.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Store description is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    /// An entry or column name failed validation.
    #[error("invalid name: {0}")]
    InvalidName(#[from] ValidationError),
    /// Two entries share one name.
    #[error("duplicate entry name '{name}'")]
    DuplicateEntry {
        /// The repeated name.
        name: String,
    },
    /// An entry uses a name reserved by the output document format.
    #[error("entry name '{name}' is reserved")]
    ReservedName {
        /// The reserved name.
        name: String,
    },
    /// A row does not match the declared column layout.
    #[error("entry '{entry}', row {row}: {reason}")]
    MalformedTable {
        /// Entry whose table is malformed.
        entry: String,
        /// Zero-based row index.
        row: u64,
        /// Reason for the mismatch.
        reason: String,
    },
}
