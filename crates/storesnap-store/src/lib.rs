//! Concrete store backends for storesnap.
//!
//! This crate provides:
//! - `MemoryStore`, the in-memory reference implementation of the `Store` trait
//! - The JSON store description format and its loader
//!
//! The description format exists for fixtures, tests, and the CLI; real
//! deployments can implement `storesnap_model::Store` over any source of
//! records.

#![deny(missing_docs)]

/// Error types for store backends.
pub mod error;
/// Store description file format and loader.
pub mod file;
/// In-memory store backend.
pub mod memory;

pub use error::StoreError;
pub use file::{build_store, load_store, ColumnDef, EntryDef, StoreFile, TableDef};
pub use memory::{MemoryEntry, MemoryPayload, MemoryStore, TableData};
