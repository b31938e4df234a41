//! Digest command implementation.

use base64::Engine;
use sha2::{Digest, Sha256};
use storesnap_encode::{assemble, AssembleOptions, CanonicalObjectEncoder};
use storesnap_store::load_store;

pub fn run(store_path: String, no_placeholder: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(&store_path)
        .map_err(|e| format!("Failed to load store {}: {}", store_path, e))?;

    let encoder = CanonicalObjectEncoder::new();
    let options = AssembleOptions {
        legacy_placeholder: !no_placeholder,
    };
    let document = assemble(&store, &encoder, &options)?;

    let hash = Sha256::digest(document.as_bytes());
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash);
    println!("sha-256:{}", b64);

    Ok(())
}
