use serde::{Deserialize, Serialize};

/// One scalar cell value read from a tabular record.
///
/// Integral and floating values share a single textual formatting rule:
/// the default decimal form of the value itself. The column kind never
/// selects a different rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Integer value. Listed before `Float` so integral JSON numbers keep
    /// full `i64` precision when deserialized.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl Scalar {
    /// Renders the scalar as a standalone JSON fragment.
    ///
    /// Numbers use their default decimal text form; text is emitted as an
    /// escaped JSON string.
    pub fn fragment(&self) -> String {
        match self {
            Scalar::Int(v) => v.to_string(),
            Scalar::Float(v) => v.to_string(),
            Scalar::Text(v) => escape_text(v),
        }
    }

    /// Renders the scalar's string form wrapped in JSON quotes.
    ///
    /// Used for element-valued columns, which emit a stringified fallback
    /// rather than numeric data.
    pub fn quoted(&self) -> String {
        match self {
            Scalar::Int(v) => format!("\"{}\"", v),
            Scalar::Float(v) => format!("\"{}\"", v),
            Scalar::Text(v) => escape_text(v),
        }
    }

    /// Returns `true` for a floating value with no JSON representation
    /// (NaN or infinite).
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Scalar::Float(v) if !v.is_finite())
    }
}

fn escape_text(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}
