//! Power-Quality Event Library
//!
//! A stateless, reusable library for classifying and aggregating power-quality
//! (PQ) events exported by a monitoring backend.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on aggregation:
//! - Loads event and substation exports (JSON) with per-record leniency
//! - Classifies events for the SARFI-70 severity index
//! - Derives the dashboard statistics (recent count, monthly count,
//!   SARFI-70 monthly total) at an explicit reference instant
//!
//! The library does NOT:
//! - Detect or group events (grouping happens upstream, in the backend)
//! - Store or mutate records
//! - Render reports or talk to a terminal
//!
//! All higher-level functionality is in the application layer (pq-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use pq_events::{load_events, summarize};
//! use chrono::Utc;
//! use std::path::Path;
//!
//! // Load an event export
//! let load = load_events(Path::new("events.json")).unwrap();
//!
//! // Derive the dashboard statistics at the current instant
//! let summary = summarize(&load.events, Utc::now());
//!
//! println!("Events (24h):   {}", summary.recent_count);
//! println!("Events (month): {}", summary.month_count);
//! println!("SARFI-70:       {}", summary.sarfi70_display());
//! ```

// Public modules
pub mod aggregate;
pub mod config;
pub mod ingest;
pub mod types;

// Re-export main types for convenience
pub use aggregate::{
    month_count, recent_count, sarfi70_monthly_total, summarize, summarize_with_config,
    DashboardSummary,
};
pub use config::AggregateConfig;
pub use ingest::{load_events, load_substations, EventLoad};
pub use types::{EventError, EventType, PqEvent, Result, Substation, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
