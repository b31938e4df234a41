//! Row encoding: all leaves of one row as a JSON object.

use storesnap_model::{EntryName, TabularRecord};

use crate::errors::EncodeError;
use crate::leaf::encode_leaf;

/// Encodes one row as a JSON object fragment.
///
/// Keys are column names in declaration order. Names are emitted with
/// wrapping quotes only; `ColumnName` validation guarantees they need no
/// further escaping.
pub fn encode_row<T: TabularRecord>(
    entry: &EntryName,
    table: &T,
    row: u64,
) -> Result<String, EncodeError> {
    let columns = table.columns();
    let mut members = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        let fragment = encode_leaf(entry, table, row, index)?;
        members.push(format!("\"{}\":{}", column.name, fragment));
    }
    Ok(format!("{{{}}}", members.join(",")))
}
