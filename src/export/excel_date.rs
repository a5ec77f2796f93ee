// src/export/excel_date.rs

use chrono::NaiveDateTime;

/// Number format applied to date-time cells.
pub(crate) const DATE_TIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Days between the Excel epoch (1899-12-30) and the Unix epoch.
const UNIX_EPOCH_SERIAL: f64 = 25569.0;

/// Excel serial (days since 1899-12-30, fractional time of day).
pub(crate) fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let millis = dt.and_utc().timestamp_millis() as f64;
    UNIX_EPOCH_SERIAL + millis / 86_400_000.0
}
