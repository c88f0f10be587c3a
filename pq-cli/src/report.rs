//! Dashboard report rendering
//!
//! Renders the summary statistics as a ruled text report or as JSON. The
//! SARFI-70 total is always emitted in its 4-decimal display form.

use anyhow::Result;
use chrono::SecondsFormat;
use pq_events::{DashboardSummary, Timestamp};
use serde::{Deserialize, Serialize};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Txt,
    Json,
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::Txt
    }
}

/// Context lines shown alongside the statistics
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    /// Reference instant the windows were evaluated at
    pub now: Timestamp,
    /// Events that loaded cleanly across all input files
    pub events_loaded: usize,
    /// Records dropped as malformed during loading
    pub events_skipped: usize,
    /// Substations in the monitored fleet
    pub substation_count: usize,
}

/// Render a summary in the requested format
pub fn render(
    summary: &DashboardSummary,
    context: &ReportContext,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Txt => Ok(render_txt(summary, context)),
        ReportFormat::Json => render_json(summary, context),
    }
}

fn render_txt(summary: &DashboardSummary, context: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════════════\n");
    out.push_str("  Power-Quality Dashboard\n");
    out.push_str("═══════════════════════════════════════════════\n\n");

    out.push_str(&format!(
        "Reference instant: {}\n",
        context.now.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    out.push_str(&format!(
        "Events loaded:     {} ({} skipped)\n",
        context.events_loaded, context.events_skipped
    ));
    out.push_str(&format!("Substations:       {}\n", context.substation_count));

    out.push_str("\n───────────────────────────────────────────────\n");
    out.push_str(&format!("  Events (last 24h):     {}\n", summary.recent_count));
    out.push_str(&format!("  Events (this month):   {}\n", summary.month_count));
    out.push_str(&format!("  SARFI-70 (this month): {}\n", summary.sarfi70_display()));
    out.push_str("───────────────────────────────────────────────\n");

    out
}

fn render_json(summary: &DashboardSummary, context: &ReportContext) -> Result<String> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        context: &'a ReportContext,
        recent_count: usize,
        month_count: usize,
        sarfi70_monthly_total: String,
    }

    let report = JsonReport {
        context,
        recent_count: summary.recent_count,
        month_count: summary.month_count,
        sarfi70_monthly_total: summary.sarfi70_display(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
