//! Core types for the power-quality event library
//!
//! This module defines the records the library consumes. Records are
//! externally owned: the backend creates them, the library only reads them
//! and derives summaries - nothing here mutates or persists an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Category of a power-quality disturbance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Short-duration drop in voltage magnitude
    VoltageDip,
    /// Short-duration rise in voltage magnitude
    VoltageSwell,
    /// Complete loss of supply voltage
    Interruption,
    /// Sub-cycle disturbance (switching, lightning)
    Transient,
    /// Any tag this library does not recognize
    #[serde(other)]
    Unknown,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::VoltageDip => write!(f, "voltage_dip"),
            EventType::VoltageSwell => write!(f, "voltage_swell"),
            EventType::Interruption => write!(f, "interruption"),
            EventType::Transient => write!(f, "transient"),
            EventType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single power-quality event as exported by the monitoring backend
///
/// Boolean flags default to false and the SARFI-70 contribution to absent
/// when missing on the wire; a record degrades silently rather than failing
/// the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PqEvent {
    /// Instant the disturbance occurred
    pub timestamp: Timestamp,
    /// Disturbance category
    pub event_type: EventType,
    /// True if this event is the representative root of a correlated group
    #[serde(default)]
    pub is_mother_event: bool,
    /// True if an external detection rule flagged this event as spurious
    #[serde(default)]
    pub false_event: bool,
    /// Contribution to the SARFI-70 severity index (absent counts as zero)
    #[serde(default)]
    pub sarfi_70: Option<f64>,
    /// Owning substation (not consulted by the summary statistics)
    #[serde(default)]
    pub substation_id: Option<String>,
}

impl PqEvent {
    /// Check whether this event can contribute to the SARFI-70 index
    ///
    /// A contributing event is a genuine (non-false) mother voltage dip.
    /// The calendar-month window is applied by the aggregation, not here.
    pub fn counts_toward_sarfi70(&self) -> bool {
        self.event_type == EventType::VoltageDip && self.is_mother_event && !self.false_event
    }

    /// SARFI-70 contribution of this event, with absent values coalesced to zero
    pub fn sarfi70_contribution(&self) -> f64 {
        self.sarfi_70.unwrap_or(0.0)
    }
}

/// A monitored substation
///
/// Opaque to the aggregation: the dashboard reports the fleet size but no
/// statistic reads these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substation {
    /// Substation identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Grid region (optional)
    #[serde(default)]
    pub region: Option<String>,
    /// Nominal voltage level in kV (optional)
    #[serde(default)]
    pub nominal_kv: Option<f64>,
}

/// Errors that can occur while loading event or substation files
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Failed to parse event file: {0}")]
    EventParseError(String),

    #[error("Failed to parse substation file: {0}")]
    SubstationParseError(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
