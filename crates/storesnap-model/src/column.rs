use serde::{Deserialize, Serialize};

use crate::name::ColumnName;

/// Kind of a tabular column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Fixed-width integer-valued column.
    #[serde(rename = "fixed")]
    FixedNumeric,
    /// Floating-point column.
    #[serde(rename = "float")]
    FloatingPoint,
    /// Character-string column; always contributes exactly one value per
    /// row, whatever width it declares.
    #[serde(rename = "string")]
    CharString,
    /// Column carrying a structured composite value, encoded via a quoted
    /// string fallback instead of a numeric array.
    #[serde(rename = "element")]
    ElementValued,
}

/// Declared shape of one tabular column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its record.
    pub name: ColumnName,
    /// Value kind.
    pub kind: ColumnKind,
    /// Declared fixed length (scalar values per row).
    pub width: i32,
    /// Whether the column declares nested sub-columns.
    #[serde(default)]
    pub has_subcolumns: bool,
}

impl Column {
    /// Creates a column with the given shape and no sub-columns.
    pub fn new(name: ColumnName, kind: ColumnKind, width: i32) -> Self {
        Self {
            name,
            kind,
            width,
            has_subcolumns: false,
        }
    }
}
