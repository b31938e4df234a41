use thiserror::Error;

/// Errors that can occur while encoding a store document.
///
/// Every variant is unrecoverable for the current run: the whole document
/// is abandoned and no partial output is produced.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A nested store was encountered at the top level.
    #[error("entry '{entry}' is a nested store, which is not supported")]
    UnsupportedNesting {
        /// Name of the offending entry.
        entry: String,
    },
    /// A column's effective width falls outside the supported range.
    #[error("column '{column}' in entry '{entry}' has unsupported width {width}")]
    UnsupportedWidth {
        /// Name of the entry being encoded.
        entry: String,
        /// Name of the offending column.
        column: String,
        /// Resolved width that was rejected.
        width: i32,
    },
    /// A column declares nested sub-columns.
    #[error("column '{column}' in entry '{entry}' declares nested sub-columns")]
    UnsupportedColumn {
        /// Name of the entry being encoded.
        entry: String,
        /// Name of the offending column.
        column: String,
    },
    /// The store failed to materialize a row's data.
    #[error("failed to read row {row}, column '{column}' of entry '{entry}': {reason}")]
    RowRead {
        /// Name of the entry being encoded.
        entry: String,
        /// Zero-based row index.
        row: u64,
        /// Name of the column being read.
        column: String,
        /// Store-provided reason.
        reason: String,
    },
    /// A floating-point cell is NaN or infinite and has no JSON form.
    #[error("non-finite number in row {row}, column '{column}' of entry '{entry}'")]
    NonFiniteNumber {
        /// Name of the entry being encoded.
        entry: String,
        /// Zero-based row index.
        row: u64,
        /// Name of the offending column.
        column: String,
    },
    /// The injected object encoder failed.
    #[error("object encoding failed for entry '{entry}': {reason}")]
    Object {
        /// Name of the offending entry.
        entry: String,
        /// Encoder-provided reason.
        reason: String,
    },
    /// I/O error while writing the output document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
