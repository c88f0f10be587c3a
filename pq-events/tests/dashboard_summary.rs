// End-to-end dashboard summary over a mixed event set
use chrono::{Duration, TimeZone, Utc};
use pq_events::{summarize, summarize_with_config, AggregateConfig, EventType, PqEvent, Timestamp};

fn event(
    ts: Timestamp,
    event_type: EventType,
    mother: bool,
    false_event: bool,
    sarfi_70: Option<f64>,
    substation: &str,
) -> PqEvent {
    PqEvent {
        timestamp: ts,
        event_type,
        is_mother_event: mother,
        false_event,
        sarfi_70,
        substation_id: Some(substation.to_string()),
    }
}

#[test]
fn mixed_event_set_produces_all_three_statistics() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

    let events = vec![
        // Last night, counts everywhere: recent + month + SARFI
        event(now - Duration::hours(10), EventType::VoltageDip, true, false, Some(1.25), "SS-104"),
        // Earlier this month, outside the 24h window
        event(now - Duration::days(5), EventType::VoltageDip, true, false, Some(0.5), "SS-200"),
        // Recent swell: recent + month, never SARFI
        event(now - Duration::hours(2), EventType::VoltageSwell, true, false, Some(4.0), "SS-104"),
        // Recent false dip: recent + month, excluded from SARFI
        event(now - Duration::hours(3), EventType::VoltageDip, true, true, Some(5.0), "SS-104"),
        // Sub-event of a group this month: not a mother, no SARFI contribution
        event(now - Duration::days(2), EventType::VoltageDip, false, false, Some(2.0), "SS-200"),
        // Last month entirely
        event(now - Duration::days(40), EventType::VoltageDip, true, false, Some(3.0), "SS-104"),
    ];

    let summary = summarize(&events, now);
    assert_eq!(summary.recent_count, 3);
    assert_eq!(summary.month_count, 5);
    assert_eq!(summary.sarfi70_monthly_total, 1.75);
    assert_eq!(summary.sarfi70_display(), "1.7500");
}

#[test]
fn substation_filter_narrows_every_statistic() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

    let events = vec![
        event(now - Duration::hours(10), EventType::VoltageDip, true, false, Some(1.25), "SS-104"),
        event(now - Duration::hours(11), EventType::VoltageDip, true, false, Some(0.5), "SS-200"),
    ];

    let config = AggregateConfig::new().with_substation_filter(vec!["SS-104".to_string()]);
    let summary = summarize_with_config(&events, now, &config);

    assert_eq!(summary.recent_count, 1);
    assert_eq!(summary.month_count, 1);
    assert_eq!(summary.sarfi70_display(), "1.2500");
}
