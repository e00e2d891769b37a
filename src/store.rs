use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::HarvestError;
use crate::model::Collection;

/// Load the store, falling back to an empty collection when the file is
/// absent, unreadable, or not a valid store document.
pub fn load(path: &Path) -> Collection {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!("No existing store at {}: {e}", path.display());
            return Collection::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(collection) => collection,
        Err(e) => {
            warn!("Ignoring unparseable store at {}: {e}", path.display());
            Collection::default()
        }
    }
}

/// Write the store as pretty-printed JSON (2-space indent).
pub fn save(collection: &Collection, path: &Path) -> Result<(), HarvestError> {
    let text = serde_json::to_string_pretty(collection)?;
    fs::write(path, text)?;
    Ok(())
}
