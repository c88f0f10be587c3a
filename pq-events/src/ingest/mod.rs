//! Event and substation export loading
//!
//! Loads the externally-supplied collections from backend export files.
//! Loading is lenient per record: a malformed element (unparsable timestamp,
//! wrong field type) is logged and skipped, it does not fail the file. An
//! event skipped here is excluded from every time window downstream.

use crate::types::{EventError, PqEvent, Result, Substation};
use std::path::Path;

pub mod json;

/// Result of loading an event export
#[derive(Debug, Clone, Default)]
pub struct EventLoad {
    /// Events that deserialized cleanly
    pub events: Vec<PqEvent>,
    /// Number of records skipped as malformed
    pub skipped: usize,
}

/// Load events from an export file, dispatching on the file extension
pub fn load_events(path: &Path) -> Result<EventLoad> {
    match extension_of(path).as_deref() {
        Some("json") => {
            log::debug!("Detected JSON event export");
            json::load_events(path)
        }
        other => Err(EventError::UnsupportedFormat(format!("{:?}", other))),
    }
}

/// Load substations from an export file, dispatching on the file extension
pub fn load_substations(path: &Path) -> Result<Vec<Substation>> {
    match extension_of(path).as_deref() {
        Some("json") => {
            log::debug!("Detected JSON substation export");
            json::load_substations(path)
        }
        other => Err(EventError::UnsupportedFormat(format!("{:?}", other))),
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
}
