//! Tabular encoding: every row of one record as a JSON array.

use storesnap_model::{EntryName, TabularRecord};

use crate::errors::EncodeError;
use crate::row::encode_row;

/// Encodes a tabular record as a JSON array fragment, row 0 first.
///
/// The row count is read once before iteration; records whose length
/// changes mid-pass are not supported. Any leaf or row failure aborts the
/// whole call and no partial array is returned.
pub fn encode_table<T: TabularRecord>(entry: &EntryName, table: &T) -> Result<String, EncodeError> {
    let rows = table.row_count();
    let mut fragments = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        fragments.push(encode_row(entry, table, row)?);
    }
    Ok(format!("[{}]", fragments.join(",")))
}
