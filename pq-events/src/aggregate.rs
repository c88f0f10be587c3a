//! Dashboard aggregation
//!
//! Derives the three display statistics from an externally-supplied event
//! collection: events in the trailing 24 hours, events in the current
//! calendar month, and the SARFI-70 monthly total. All operations are pure
//! and take the reference instant as an explicit parameter, so callers (and
//! tests) control the clock.

use crate::config::AggregateConfig;
use crate::types::{PqEvent, Timestamp};
use chrono::{Datelike, Duration};
use serde::Serialize;

/// The three display-ready dashboard statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Events in the trailing 24-hour window
    pub recent_count: usize,
    /// Events in the current calendar month
    pub month_count: usize,
    /// SARFI-70 monthly total (sum of per-event contributions)
    pub sarfi70_monthly_total: f64,
}

impl DashboardSummary {
    /// SARFI-70 total formatted for display (4 decimal places)
    pub fn sarfi70_display(&self) -> String {
        format!("{:.4}", self.sarfi70_monthly_total)
    }
}

/// Check whether `ts` falls strictly after `now - window_hours`
///
/// The cutoff instant itself is excluded; there is no upper bound.
pub fn in_recent_window(ts: Timestamp, now: Timestamp, window_hours: i64) -> bool {
    ts > now - Duration::hours(window_hours)
}

/// Check whether `ts` falls in the same calendar year and month as `now`
///
/// Calendar comparison, not a rolling window: with `now` on the 1st of a
/// month, yesterday's events do not match regardless of time of day.
pub fn same_calendar_month(ts: Timestamp, now: Timestamp) -> bool {
    ts.year() == now.year() && ts.month() == now.month()
}

/// Count events in the trailing 24-hour window ending at `now`
pub fn recent_count(events: &[PqEvent], now: Timestamp) -> usize {
    events
        .iter()
        .filter(|e| in_recent_window(e.timestamp, now, 24))
        .count()
}

/// Count events in the same calendar month as `now`
pub fn month_count(events: &[PqEvent], now: Timestamp) -> usize {
    events
        .iter()
        .filter(|e| same_calendar_month(e.timestamp, now))
        .count()
}

/// SARFI-70 total for the calendar month of `now`
///
/// Sums the contributions of genuine (non-false) mother voltage dips in the
/// month. Events with no recorded contribution count as zero.
pub fn sarfi70_monthly_total(events: &[PqEvent], now: Timestamp) -> f64 {
    events
        .iter()
        .filter(|e| e.counts_toward_sarfi70() && same_calendar_month(e.timestamp, now))
        .map(|e| e.sarfi70_contribution())
        .sum()
}

/// Derive all three dashboard statistics at `now`
pub fn summarize(events: &[PqEvent], now: Timestamp) -> DashboardSummary {
    DashboardSummary {
        recent_count: recent_count(events, now),
        month_count: month_count(events, now),
        sarfi70_monthly_total: sarfi70_monthly_total(events, now),
    }
}

/// Derive the dashboard statistics with pre-filtering and window overrides
///
/// Events are narrowed by the configured substation and event-type filters
/// before any statistic is computed; the recent window uses the configured
/// width. The default configuration reproduces [`summarize`] exactly.
pub fn summarize_with_config(
    events: &[PqEvent],
    now: Timestamp,
    config: &AggregateConfig,
) -> DashboardSummary {
    let selected: Vec<&PqEvent> = events
        .iter()
        .filter(|e| config.should_include_event(e))
        .collect();

    DashboardSummary {
        recent_count: selected
            .iter()
            .filter(|e| in_recent_window(e.timestamp, now, config.recent_window_hours))
            .count(),
        month_count: selected
            .iter()
            .filter(|e| same_calendar_month(e.timestamp, now))
            .count(),
        sarfi70_monthly_total: selected
            .iter()
            .filter(|e| e.counts_toward_sarfi70() && same_calendar_month(e.timestamp, now))
            .map(|e| e.sarfi70_contribution())
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventType;
    use chrono::{TimeZone, Utc};

    fn dip_at(ts: Timestamp, mother: bool, false_event: bool, sarfi_70: Option<f64>) -> PqEvent {
        PqEvent {
            timestamp: ts,
            event_type: EventType::VoltageDip,
            is_mother_event: mother,
            false_event,
            sarfi_70,
            substation_id: None,
        }
    }

    #[test]
    fn test_recent_count_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let cutoff = now - Duration::hours(24);

        let events = vec![
            dip_at(cutoff + Duration::milliseconds(1), true, false, None), // just inside
            dip_at(cutoff, true, false, None),                             // exactly 24h old
            dip_at(cutoff - Duration::milliseconds(1), true, false, None), // just outside
        ];

        // Strict comparison: the cutoff instant itself does not count
        assert_eq!(recent_count(&events, now), 1);
    }

    #[test]
    fn test_month_count_is_calendar_not_rolling() {
        // now on the 1st of the month, event 61 minutes earlier
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let late_february = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 0).unwrap();

        let events = vec![dip_at(late_february, true, false, Some(1.0))];

        // Within the last 24 hours, but in a different calendar month
        assert_eq!(recent_count(&events, now), 1);
        assert_eq!(month_count(&events, now), 0);
        assert_eq!(sarfi70_monthly_total(&events, now), 0.0);
    }

    #[test]
    fn test_month_count_ignores_day_and_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        let events = vec![
            dip_at(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(), false, false, None),
            dip_at(Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap(), false, false, None),
            dip_at(Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap(), false, false, None), // wrong year
            dip_at(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(), false, false, None),   // wrong month
        ];

        assert_eq!(month_count(&events, now), 2);
    }

    #[test]
    fn test_sarfi70_compound_filter() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let this_month = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        let last_month = Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap();

        let swell = PqEvent {
            event_type: EventType::VoltageSwell,
            ..dip_at(this_month, true, false, Some(9.0))
        };

        let events = vec![
            dip_at(this_month, true, false, Some(1.25)), // counts
            dip_at(this_month, true, true, Some(5.0)),   // false event
            dip_at(last_month, true, false, Some(2.5)),  // wrong month
            dip_at(this_month, false, false, Some(3.0)), // not a mother event
            swell,                                       // wrong category
        ];

        let summary = summarize(&events, now);
        assert_eq!(summary.sarfi70_monthly_total, 1.25);
        assert_eq!(summary.sarfi70_display(), "1.2500");
    }

    #[test]
    fn test_sarfi70_absent_contribution_is_zero() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let this_month = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();

        let events = vec![
            dip_at(this_month, true, false, None),       // qualifies, contributes zero
            dip_at(this_month, true, false, Some(0.75)),
        ];

        assert_eq!(sarfi70_monthly_total(&events, now), 0.75);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let events = vec![
            dip_at(now - Duration::hours(1), true, false, Some(1.25)),
            dip_at(now - Duration::days(40), true, false, Some(2.0)),
        ];

        assert_eq!(summarize(&events, now), summarize(&events, now));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
        assert_eq!(summary.recent_count, 0);
        assert_eq!(summary.month_count, 0);
        assert_eq!(summary.sarfi70_display(), "0.0000");
    }

    #[test]
    fn test_summarize_with_default_config_matches_summarize() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let events = vec![
            dip_at(now - Duration::hours(1), true, false, Some(1.25)),
            dip_at(now - Duration::hours(30), true, true, Some(5.0)),
            dip_at(now - Duration::days(45), false, false, None),
        ];

        let config = AggregateConfig::default();
        assert_eq!(summarize_with_config(&events, now, &config), summarize(&events, now));
    }

    #[test]
    fn test_summarize_with_substation_filter() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        let mut a = dip_at(now - Duration::hours(1), true, false, Some(1.0));
        a.substation_id = Some("SS-104".to_string());
        let mut b = dip_at(now - Duration::hours(2), true, false, Some(2.0));
        b.substation_id = Some("SS-200".to_string());

        let config = AggregateConfig::new().with_substation_filter(vec!["SS-104".to_string()]);
        let summary = summarize_with_config(&[a, b], now, &config);

        assert_eq!(summary.recent_count, 1);
        assert_eq!(summary.sarfi70_monthly_total, 1.0);
    }

    #[test]
    fn test_summarize_with_wider_recent_window() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let events = vec![dip_at(now - Duration::hours(30), true, false, None)];

        let config = AggregateConfig::new().with_recent_window_hours(48);
        let summary = summarize_with_config(&events, now, &config);

        assert_eq!(summary.recent_count, 1);
        assert_eq!(recent_count(&events, now), 0); // unconfigured window stays 24h
    }
}
