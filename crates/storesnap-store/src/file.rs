//! Store description file format and loader.
//!
//! A description file is a JSON document listing entries in enumeration
//! order:
//!
//! ```json
//! {
//!   "entries": [
//!     {"name": "run_info", "record": {"detector": "north"}},
//!     {"name": "hits", "record": {"title": "hit bank"},
//!      "table": {"columns": [{"name": "x", "kind": "fixed", "width": 3}],
//!                "rows": [[[1, 2, 3]], [[4, 5, 6]]]}},
//!     {"name": "sub", "nested": true}
//!   ]
//! }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storesnap_model::{Column, ColumnKind, ColumnName, EntryName, Scalar};

use crate::error::StoreError;
use crate::memory::{MemoryEntry, MemoryPayload, MemoryStore, TableData};

/// Entry name reserved for the placeholder member of output documents.
const RESERVED_ENTRY_NAME: &str = "dummy";

/// Top-level store description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreFile {
    /// Entries in enumeration order.
    #[serde(default)]
    pub entries: Vec<EntryDef>,
}

/// One entry in a store description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDef {
    /// Entry name.
    pub name: String,
    /// Plain record payload (the metadata view for tabular entries).
    #[serde(default = "empty_object")]
    pub record: Value,
    /// Tabular payload, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableDef>,
    /// Marks the entry as a nested store.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nested: bool,
}

/// Declared table layout and row data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDef {
    /// Ordered column declarations.
    pub columns: Vec<ColumnDef>,
    /// Row-major cell data: `rows[row][column][element]`.
    #[serde(default)]
    pub rows: Vec<Vec<Vec<Scalar>>>,
}

/// One column declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Column kind.
    pub kind: ColumnKind,
    /// Declared width (scalar values per row).
    pub width: i32,
    /// Whether the column declares nested sub-columns.
    #[serde(default)]
    pub has_subcolumns: bool,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// Reads a store description file and builds the in-memory store.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<MemoryStore, StoreError> {
    let text = fs::read_to_string(path)?;
    let file: StoreFile = serde_json::from_str(&text)?;
    build_store(file)
}

/// Builds an in-memory store from a parsed description.
///
/// Validates entry and column names, rejects duplicate and reserved entry
/// names, and checks each row against the declared column count.
pub fn build_store(file: StoreFile) -> Result<MemoryStore, StoreError> {
    let mut store = MemoryStore::new();
    let mut seen = BTreeSet::new();

    for def in file.entries {
        if def.name == RESERVED_ENTRY_NAME {
            return Err(StoreError::ReservedName { name: def.name });
        }
        if !seen.insert(def.name.clone()) {
            return Err(StoreError::DuplicateEntry { name: def.name });
        }
        let name = EntryName::parse(def.name)?;

        let payload = if def.nested {
            MemoryPayload::Nested
        } else if let Some(table) = def.table {
            MemoryPayload::Tabular {
                meta: def.record,
                table: build_table(&name, table)?,
            }
        } else {
            MemoryPayload::Plain(def.record)
        };

        store.push(MemoryEntry { name, payload });
    }

    Ok(store)
}

fn build_table(entry: &EntryName, def: TableDef) -> Result<TableData, StoreError> {
    let mut columns = Vec::with_capacity(def.columns.len());
    for column in def.columns {
        columns.push(Column {
            name: ColumnName::parse(column.name)?,
            kind: column.kind,
            width: column.width,
            has_subcolumns: column.has_subcolumns,
        });
    }

    for (index, row) in def.rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(StoreError::MalformedTable {
                entry: entry.to_string(),
                row: index as u64,
                reason: format!("{} cell groups for {} columns", row.len(), columns.len()),
            });
        }
    }

    Ok(TableData::new(columns, def.rows))
}
