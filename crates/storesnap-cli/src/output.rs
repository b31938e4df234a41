//! Output formatting utilities.

use serde_json::{json, Value};
use storesnap_model::TabularRecord;
use storesnap_store::{MemoryEntry, MemoryPayload};

/// Builds a JSON summary of one entry.
pub fn entry_summary(entry: &MemoryEntry) -> Value {
    match &entry.payload {
        MemoryPayload::Plain(_) => json!({
            "name": entry.name.as_ref(),
            "kind": "plain",
        }),
        MemoryPayload::Tabular { table, .. } => json!({
            "name": entry.name.as_ref(),
            "kind": "tabular",
            "rows": table.row_count(),
            "columns": table.columns().len(),
        }),
        MemoryPayload::Nested => json!({
            "name": entry.name.as_ref(),
            "kind": "nested",
        }),
    }
}

/// Formats an entry as a simple table row.
pub fn format_table_row(entry: &MemoryEntry) -> String {
    let name = truncate(entry.name.as_ref(), 32);
    match &entry.payload {
        MemoryPayload::Plain(_) => format!("{:<32} {:<10} {:>8} {:>8}", name, "plain", "-", "-"),
        MemoryPayload::Tabular { table, .. } => format!(
            "{:<32} {:<10} {:>8} {:>8}",
            name,
            "tabular",
            table.row_count(),
            table.columns().len()
        ),
        MemoryPayload::Nested => format!("{:<32} {:<10} {:>8} {:>8}", name, "nested", "-", "-"),
    }
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<32} {:<10} {:>8} {:>8}", "NAME", "KIND", "ROWS", "COLUMNS");
    println!("{}", "-".repeat(62));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
