//! Default object encoder for JSON-valued plain records.

use serde_json::Value;
use storesnap_model::{EntryName, ObjectEncodeError, ObjectEncoder};

/// Object encoder that renders `serde_json::Value` records as RFC 8785
/// canonical JSON.
///
/// Member order and number formatting are fixed by the canonical form, so
/// plain-record fragments are as reproducible as tabular ones.
#[derive(Debug, Default, Clone)]
pub struct CanonicalObjectEncoder;

impl CanonicalObjectEncoder {
    /// Creates the default encoder.
    pub fn new() -> Self {
        Self
    }
}

impl ObjectEncoder<Value> for CanonicalObjectEncoder {
    fn encode(&self, _name: &EntryName, record: &Value) -> Result<String, ObjectEncodeError> {
        canonical_json::to_string(record).map_err(|e| ObjectEncodeError::new(e.to_string()))
    }
}
