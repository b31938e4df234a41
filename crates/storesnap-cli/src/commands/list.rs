//! List command implementation.

use storesnap_store::load_store;

use crate::output;

pub fn run(store_path: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(&store_path)
        .map_err(|e| format!("Failed to load store {}: {}", store_path, e))?;

    if !json_output {
        output::print_table_header();
    }

    for entry in store.iter() {
        if json_output {
            println!("{}", serde_json::to_string(&output::entry_summary(entry))?);
        } else {
            println!("{}", output::format_table_row(entry));
        }
    }

    Ok(())
}
