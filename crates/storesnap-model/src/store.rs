//! Store and tabular record traits.

use thiserror::Error;

use crate::column::Column;
use crate::name::EntryName;
use crate::scalar::Scalar;

/// Error returned when a store cannot materialize a row value.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RowReadError(String);

impl RowReadError {
    /// Creates a row read error from a reason string.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Read access to one tabular record.
///
/// Row count and column layout are fixed for the lifetime of the record;
/// encoders read the count once and then address cells by
/// `(row, column, element)`.
pub trait TabularRecord {
    /// Number of rows, fixed and known before iteration.
    fn row_count(&self) -> u64;

    /// Ordered column declarations.
    fn columns(&self) -> &[Column];

    /// Reads one scalar cell.
    fn value(&self, row: u64, column: usize, element: usize) -> Result<Scalar, RowReadError>;
}

/// Payload of one top-level store entry.
pub enum Payload<'a, R, T> {
    /// Plain record, handed to the injected object encoder.
    Plain(&'a R),
    /// Tabular record: a metadata view for the object encoder plus row data.
    Tabular {
        /// Non-tabular metadata view of the record.
        meta: &'a R,
        /// Row and column access.
        table: &'a T,
    },
    /// A store nested inside an entry. Encoding one is a fatal failure;
    /// the assembler never descends into it.
    Nested,
}

/// One named top-level entry.
pub struct Entry<'a, R, T> {
    /// Entry name, unique within the store.
    pub name: &'a EntryName,
    /// Typed payload.
    pub payload: Payload<'a, R, T>,
}

/// Read-only handle to a store of named, typed records.
pub trait Store {
    /// Opaque plain-record payload handed to the object encoder.
    type Record;
    /// Tabular payload type.
    type Table: TabularRecord;

    /// Lists top-level entries in enumeration order.
    ///
    /// Enumeration order is not assumed stable; the document assembler
    /// sorts by name before emission.
    fn entries(&self) -> Vec<Entry<'_, Self::Record, Self::Table>>;
}
