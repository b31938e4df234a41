//! Object encoder capability boundary.

use thiserror::Error;

use crate::name::EntryName;

/// Error surfaced by an object encoder implementation.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ObjectEncodeError(String);

impl ObjectEncodeError {
    /// Creates an object encode error from a reason string.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Capability for converting a non-tabular record to a JSON fragment.
///
/// The document assembler treats implementations as a black box: the
/// returned fragment is embedded in the output document as-is, without
/// inspection or validation.
pub trait ObjectEncoder<R> {
    /// Encodes one record to a JSON fragment.
    fn encode(&self, name: &EntryName, record: &R) -> Result<String, ObjectEncodeError>;
}
