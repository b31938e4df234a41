//! Dump command implementation.

use storesnap_encode::{assemble, write_document, AssembleOptions, CanonicalObjectEncoder};
use storesnap_store::load_store;
use tracing::{debug, info};

pub fn run(
    store_path: String,
    output: Option<String>,
    no_placeholder: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("dumping store {}", store_path);
    let store = load_store(&store_path)
        .map_err(|e| format!("Failed to load store {}: {}", store_path, e))?;
    debug!("loaded {} entries", store.len());

    let encoder = CanonicalObjectEncoder::new();
    let options = AssembleOptions {
        legacy_placeholder: !no_placeholder,
    };

    match output {
        Some(path) => {
            write_document(&store, &encoder, &options, &path)
                .map_err(|e| format!("Failed to write {}: {}", path, e))?;
            info!("wrote {}", path);
        }
        None => {
            let document = assemble(&store, &encoder, &options)?;
            println!("{}", document);
        }
    }

    Ok(())
}
