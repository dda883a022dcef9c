//! JSON file persistence for the inventory store.
//!
//! One JSON object per file, item name to quantity, indented for human
//! readability. Writes are plain `fs::write` with no atomicity: a crash
//! mid-write can leave a torn file.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::store::Inventory;
use stockroom_core::DomainError;

/// Default location of the persisted store.
pub const DEFAULT_STORE_PATH: &str = "inventory.json";

/// Failure while reading or writing the persisted store.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("inventory file io failure: {0}")]
    Io(#[from] io::Error),

    #[error("malformed inventory file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Load the store from `path`.
///
/// A missing file yields an empty store, not an error. Anything else that
/// goes wrong (unreadable file, malformed JSON, content failing validation)
/// propagates to the caller.
pub fn load(path: impl AsRef<Path>) -> Result<Inventory, PersistError> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "inventory file not found, starting with empty data");
            return Ok(Inventory::new());
        }
        Err(err) => return Err(err.into()),
    };

    let raw: BTreeMap<String, i64> = serde_json::from_slice(&bytes)?;
    let inventory = validate(raw)?;
    tracing::info!(path = %path.display(), items = inventory.len(), "inventory data loaded");
    Ok(inventory)
}

/// File content crosses an untyped boundary, so the store rules are
/// re-checked here: names must be non-blank, quantities non-negative.
/// Zero-quantity entries are dropped (absent means zero).
fn validate(raw: BTreeMap<String, i64>) -> Result<Inventory, DomainError> {
    for (item, qty) in &raw {
        if item.trim().is_empty() {
            return Err(DomainError::validation("persisted item name cannot be empty"));
        }
        if *qty < 0 {
            return Err(DomainError::validation(format!(
                "negative quantity {qty} for {item}"
            )));
        }
    }

    let items = raw.into_iter().filter(|(_, qty)| *qty > 0).collect();
    Ok(Inventory::from_items(items))
}

/// Write the store to `path` as a 4-space-indented JSON object, replacing
/// any existing file.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    inventory.serialize(&mut ser)?;
    buf.push(b'\n');

    fs::write(path, buf)?;
    tracing::info!(path = %path.display(), items = inventory.len(), "inventory data saved");
    Ok(())
}
