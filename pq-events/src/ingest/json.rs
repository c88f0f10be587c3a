//! JSON export parsing
//!
//! The monitoring backend exports events and substations as JSON arrays.
//! Each element is deserialized on its own so one bad record is skipped with
//! a warning rather than rejecting the whole export.

use super::EventLoad;
use crate::types::{EventError, PqEvent, Result, Substation};
use std::fs;
use std::path::Path;

/// Parse a JSON event export
pub fn load_events(path: &Path) -> Result<EventLoad> {
    log::info!("Loading event file: {:?}", path);

    let content = fs::read_to_string(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&content)
        .map_err(|e| EventError::EventParseError(format!("{:?}: {}", path, e)))?;

    let mut load = EventLoad::default();
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<PqEvent>(value) {
            Ok(event) => load.events.push(event),
            Err(e) => {
                log::warn!("Skipping malformed event record {} in {:?}: {}", index, path, e);
                load.skipped += 1;
            }
        }
    }

    log::info!(
        "Loaded {} events from {:?} ({} skipped)",
        load.events.len(),
        path,
        load.skipped
    );
    Ok(load)
}

/// Parse a JSON substation export
pub fn load_substations(path: &Path) -> Result<Vec<Substation>> {
    log::info!("Loading substation file: {:?}", path);

    let content = fs::read_to_string(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&content)
        .map_err(|e| EventError::SubstationParseError(format!("{:?}: {}", path, e)))?;

    let mut substations = Vec::new();
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Substation>(value) {
            Ok(substation) => substations.push(substation),
            Err(e) => {
                log::warn!(
                    "Skipping malformed substation record {} in {:?}: {}",
                    index,
                    path,
                    e
                );
            }
        }
    }

    log::info!("Loaded {} substations from {:?}", substations.len(), path);
    Ok(substations)
}
