//! Document assembly: one sorted, reproducible JSON object per store.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use storesnap_model::{EntryName, ObjectEncoder, Payload, Store};

use crate::errors::EncodeError;
use crate::table::encode_table;

/// Key of the legacy placeholder member appended after all real keys.
pub const PLACEHOLDER_KEY: &str = "dummy";

/// Suffix appended to a tabular entry's name for its row-content key.
pub const CONTENT_SUFFIX: &str = "-Content";

/// Options controlling document assembly.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Whether to append the legacy `"dummy":null` member (default: true).
    ///
    /// Historical documents always carry the placeholder; disable it only
    /// when byte-compatibility with previously written files is not needed.
    pub legacy_placeholder: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            legacy_placeholder: true,
        }
    }
}

/// Assembles the complete JSON document for a store.
///
/// Entries are enumerated once. Plain records go through the injected
/// object encoder; tabular records contribute their metadata view under
/// `<name>` and their row data under `<name>-Content`. Keys are serialized
/// in ascending byte order regardless of enumeration order, with the
/// placeholder member last.
///
/// A nested store aborts the whole assembly: entries after the failing one
/// are never encoded and nothing is emitted.
pub fn assemble<S, E>(
    store: &S,
    encoder: &E,
    options: &AssembleOptions,
) -> Result<String, EncodeError>
where
    S: Store,
    E: ObjectEncoder<S::Record>,
{
    let mut fragments: BTreeMap<String, String> = BTreeMap::new();

    for entry in store.entries() {
        match entry.payload {
            Payload::Nested => {
                return Err(EncodeError::UnsupportedNesting {
                    entry: entry.name.to_string(),
                });
            }
            Payload::Plain(record) => {
                fragments.insert(
                    entry.name.to_string(),
                    encode_object(encoder, entry.name, record)?,
                );
            }
            Payload::Tabular { meta, table } => {
                fragments.insert(
                    entry.name.to_string(),
                    encode_object(encoder, entry.name, meta)?,
                );
                fragments.insert(
                    format!("{}{}", entry.name, CONTENT_SUFFIX),
                    encode_table(entry.name, table)?,
                );
            }
        }
    }

    let mut members: Vec<String> = fragments
        .into_iter()
        .map(|(key, fragment)| format!("\"{}\":{}", key, fragment))
        .collect();
    if options.legacy_placeholder {
        members.push(format!("\"{}\":null", PLACEHOLDER_KEY));
    }
    Ok(format!("{{{}}}", members.join(",")))
}

/// Assembles a store's document and writes it to `path`.
///
/// The document is assembled completely before the file is touched; a
/// failed assembly never creates or truncates the output file.
pub fn write_document<S, E, P>(
    store: &S,
    encoder: &E,
    options: &AssembleOptions,
    path: P,
) -> Result<(), EncodeError>
where
    S: Store,
    E: ObjectEncoder<S::Record>,
    P: AsRef<Path>,
{
    let document = assemble(store, encoder, options)?;
    fs::write(path, document)?;
    Ok(())
}

fn encode_object<R, E: ObjectEncoder<R>>(
    encoder: &E,
    name: &EntryName,
    record: &R,
) -> Result<String, EncodeError> {
    encoder.encode(name, record).map_err(|e| EncodeError::Object {
        entry: name.to_string(),
        reason: e.to_string(),
    })
}
