//! Deterministic JSON encoding for storesnap stores.
//!
//! This crate provides:
//! - Leaf, row, and tabular encoders that flatten typed records into JSON text
//! - A document assembler that emits one sorted, reproducible document per store
//! - The default canonical object encoder for JSON-valued plain records
//!
//! Encoding the same store twice yields byte-identical output. That
//! invariant is the point of the crate: two stores are semantically equal
//! exactly when their documents are byte-equal.
//!
//! ## Quick Start
//!
//! ```rust
//! use storesnap_encode::{assemble, AssembleOptions, CanonicalObjectEncoder};
//! use storesnap_store::{build_store, StoreFile};
//!
//! let file: StoreFile = serde_json::from_str(r#"{
//!     "entries": [{"name": "run_info", "record": {"detector": "north"}}]
//! }"#)?;
//! let store = build_store(file)?;
//!
//! let document = assemble(&store, &CanonicalObjectEncoder::new(), &AssembleOptions::default())?;
//! assert_eq!(document, r#"{"run_info":{"detector":"north"},"dummy":null}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Document assembly and output writing.
pub mod document;
/// Error types for encoding operations.
pub mod errors;
/// Leaf (single column cell) encoding.
pub mod leaf;
/// Default object encoder for JSON-valued records.
pub mod object;
/// Row encoding.
pub mod row;
/// Tabular record encoding.
pub mod table;

pub use document::{assemble, write_document, AssembleOptions, CONTENT_SUFFIX, PLACEHOLDER_KEY};
pub use errors::EncodeError;
pub use leaf::{encode_leaf, MAX_LEAF_WIDTH};
pub use object::CanonicalObjectEncoder;
pub use row::encode_row;
pub use table::encode_table;
