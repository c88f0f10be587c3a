//! Configuration loading and parsing

use crate::report::ReportFormat;
use anyhow::{Context, Result};
use pq_events::{AggregateConfig, EventType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub filtering: FilteringConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub event_files: Vec<PathBuf>,
    #[serde(default)]
    pub substation_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilteringConfig {
    pub substations: Option<Vec<String>>,
    pub event_types: Option<Vec<EventType>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AggregationConfig {
    #[serde(default = "default_recent_window_hours")]
    pub recent_window_hours: i64,
}

fn default_recent_window_hours() -> i64 {
    24
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            recent_window_hours: default_recent_window_hours(),
        }
    }
}

impl AppConfig {
    /// Map the file configuration onto the library's aggregation settings
    pub fn aggregate_config(&self) -> AggregateConfig {
        let mut config =
            AggregateConfig::new().with_recent_window_hours(self.aggregation.recent_window_hours);

        if let Some(substations) = &self.filtering.substations {
            config = config.with_substation_filter(substations.clone());
        }
        if let Some(event_types) = &self.filtering.event_types {
            config = config.with_event_type_filter(event_types.clone());
        }

        config
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
