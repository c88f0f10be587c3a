//! Aggregation configuration
//!
//! Minimal configuration for the summary statistics. The defaults reproduce
//! the dashboard contract (24-hour recent window, no pre-filtering); the
//! filters narrow the event set before any statistic is computed.

use crate::types::{EventType, PqEvent};
use serde::{Deserialize, Serialize};

/// Configuration for dashboard aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateConfig {
    /// Width of the "recent events" window in hours
    #[serde(default = "default_recent_window_hours")]
    pub recent_window_hours: i64,

    /// Optional: only aggregate events from these substations
    #[serde(default)]
    pub substation_filter: Option<Vec<String>>,

    /// Optional: only aggregate these event types
    #[serde(default)]
    pub event_type_filter: Option<Vec<EventType>>,
}

fn default_recent_window_hours() -> i64 {
    24
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            recent_window_hours: default_recent_window_hours(),
            substation_filter: None,
            event_type_filter: None,
        }
    }
}

impl AggregateConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the recent-window width in hours
    pub fn with_recent_window_hours(mut self, hours: i64) -> Self {
        self.recent_window_hours = hours;
        self
    }

    /// Builder method: set the substation filter
    pub fn with_substation_filter(mut self, substations: Vec<String>) -> Self {
        self.substation_filter = Some(substations);
        self
    }

    /// Builder method: set the event-type filter
    pub fn with_event_type_filter(mut self, event_types: Vec<EventType>) -> Self {
        self.event_type_filter = Some(event_types);
        self
    }

    /// Check if an event's substation passes the filter
    ///
    /// Events with no substation reference pass only when no filter is set.
    pub fn should_include_substation(&self, substation_id: Option<&str>) -> bool {
        match (&self.substation_filter, substation_id) {
            (Some(filter), Some(id)) => filter.iter().any(|s| s == id),
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    /// Check if an event type passes the filter
    pub fn should_include_event_type(&self, event_type: EventType) -> bool {
        match &self.event_type_filter {
            Some(types) => types.contains(&event_type),
            None => true,
        }
    }

    /// Check if an event passes all configured filters
    pub fn should_include_event(&self, event: &PqEvent) -> bool {
        self.should_include_substation(event.substation_id.as_deref())
            && self.should_include_event_type(event.event_type)
    }
}
