//! Leaf encoding: one column cell (or fixed-length vector) of one row.

use storesnap_model::{ColumnKind, EntryName, Scalar, TabularRecord};

use crate::errors::EncodeError;

/// Columns with a resolved width at or above this limit are rejected.
///
/// Hard policy bound on pathological and variable-length declarations that
/// the encoder cannot represent as a fixed JSON array.
pub const MAX_LEAF_WIDTH: i32 = 200;

/// Encodes one leaf of one row as a JSON fragment.
///
/// The fragment is a quoted string for element-valued columns and a
/// bracketed array of scalar values otherwise. Char-string columns always
/// contribute exactly one value, whatever width they declare, and still
/// arrive as a one-element array rather than a bare scalar.
pub fn encode_leaf<T: TabularRecord>(
    entry: &EntryName,
    table: &T,
    row: u64,
    column_index: usize,
) -> Result<String, EncodeError> {
    let column = &table.columns()[column_index];

    if column.has_subcolumns {
        return Err(EncodeError::UnsupportedColumn {
            entry: entry.to_string(),
            column: column.name.to_string(),
        });
    }

    // Element-valued columns carry one composite value with no numeric
    // array form; the quoted fallback bypasses the width policy entirely.
    if column.kind == ColumnKind::ElementValued {
        let value = read_value(entry, table, row, column_index, 0)?;
        return Ok(value.quoted());
    }

    let width = match column.kind {
        ColumnKind::CharString => 1,
        _ => column.width,
    };
    if width <= 0 || width >= MAX_LEAF_WIDTH {
        return Err(EncodeError::UnsupportedWidth {
            entry: entry.to_string(),
            column: column.name.to_string(),
            width,
        });
    }

    let mut values = Vec::with_capacity(width as usize);
    for element in 0..width as usize {
        values.push(read_value(entry, table, row, column_index, element)?.fragment());
    }
    Ok(format!("[{}]", values.join(",")))
}

fn read_value<T: TabularRecord>(
    entry: &EntryName,
    table: &T,
    row: u64,
    column_index: usize,
    element: usize,
) -> Result<Scalar, EncodeError> {
    let column = &table.columns()[column_index];
    let value = table
        .value(row, column_index, element)
        .map_err(|e| EncodeError::RowRead {
            entry: entry.to_string(),
            row,
            column: column.name.to_string(),
            reason: e.to_string(),
        })?;
    if value.is_non_finite() {
        return Err(EncodeError::NonFiniteNumber {
            entry: entry.to_string(),
            row,
            column: column.name.to_string(),
        });
    }
    Ok(value)
}
