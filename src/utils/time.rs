//! Time utilities: parsing window bounds and log timestamps, rounding durations.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Formats accepted for the event window bounds (local wall clock).
const WINDOW_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Naive formats accepted for "UTC Event Timestamp"; always read as UTC.
const LOG_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

pub fn parse_window_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    WINDOW_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parses a log timestamp. Values carrying an offset (RFC 3339, trailing `Z`)
/// are converted to UTC; naive values are taken as UTC.
pub fn parse_log_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    LOG_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Duration in minutes, rounded to 2 decimals.
pub fn round_minutes(d: TimeDelta) -> f64 {
    let minutes = d.num_milliseconds() as f64 / 60_000.0;
    (minutes * 100.0).round() / 100.0
}

/// Timezone-naive rendering used in exports and console output.
pub fn format_naive(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
