//! In-memory store backend.

use serde_json::Value;
use storesnap_model::{
    Column, Entry, EntryName, Payload, RowReadError, Scalar, Store, TabularRecord,
};

/// Row data for one tabular record, row-major: `rows[row][column][element]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    columns: Vec<Column>,
    rows: Vec<Vec<Vec<Scalar>>>,
}

impl TableData {
    /// Creates table data from a column layout and row-major cell values.
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Vec<Scalar>>>) -> Self {
        Self { columns, rows }
    }
}

impl TabularRecord for TableData {
    fn row_count(&self) -> u64 {
        self.rows.len() as u64
    }

    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn value(&self, row: u64, column: usize, element: usize) -> Result<Scalar, RowReadError> {
        let cells = self
            .rows
            .get(row as usize)
            .and_then(|r| r.get(column))
            .ok_or_else(|| {
                RowReadError::new(format!("no data at row {}, column {}", row, column))
            })?;
        cells.get(element).cloned().ok_or_else(|| {
            RowReadError::new(format!(
                "no element {} at row {}, column {}",
                element, row, column
            ))
        })
    }
}

/// Payload of one in-memory entry.
#[derive(Debug, Clone)]
pub enum MemoryPayload {
    /// Plain JSON record.
    Plain(Value),
    /// Tabular record with a metadata view.
    Tabular {
        /// Metadata record handed to the object encoder.
        meta: Value,
        /// Row data.
        table: TableData,
    },
    /// Nested store marker; encoding aborts on these.
    Nested,
}

/// One named in-memory entry.
#[derive(Debug, Clone)]
pub struct MemoryEntry {
    /// Entry name.
    pub name: EntryName,
    /// Entry payload.
    pub payload: MemoryPayload,
}

/// Store backend holding all entries in memory.
///
/// Reference implementation behind the `Store` trait; the loader in
/// [`crate::file`] produces one of these from a description file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<MemoryEntry>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry, preserving enumeration order.
    pub fn push(&mut self, entry: MemoryEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.entries.iter()
    }
}

impl Store for MemoryStore {
    type Record = Value;
    type Table = TableData;

    fn entries(&self) -> Vec<Entry<'_, Value, TableData>> {
        self.entries
            .iter()
            .map(|entry| Entry {
                name: &entry.name,
                payload: match &entry.payload {
                    MemoryPayload::Plain(record) => Payload::Plain(record),
                    MemoryPayload::Tabular { meta, table } => Payload::Tabular { meta, table },
                    MemoryPayload::Nested => Payload::Nested,
                },
            })
            .collect()
    }
}
