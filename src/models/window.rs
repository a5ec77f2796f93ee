use crate::core::timezone::TimezoneService;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_window_datetime;
use chrono::{DateTime, Utc};

/// Organizer-declared official start/end of the monitored event, in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub local_timezone: String,
}

impl EventWindow {
    /// Builds a window from absolute instants. `start` must not be after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, local_timezone: &str) -> AppResult<Self> {
        if start > end {
            return Err(AppError::Window(format!(
                "start {} is after end {}",
                start.format("%Y-%m-%d %H:%M:%S UTC"),
                end.format("%Y-%m-%d %H:%M:%S UTC")
            )));
        }

        Ok(Self {
            start,
            end,
            local_timezone: local_timezone.to_string(),
        })
    }

    /// Builds a window from `YYYY-MM-DD HH:MM:SS` wall-clock strings in the
    /// service's zone.
    pub fn from_local(start: &str, end: &str, tz: &TimezoneService) -> AppResult<Self> {
        let start_utc = localize_bound("start", start, tz)?;
        let end_utc = localize_bound("end", end, tz)?;
        Self::new(start_utc, end_utc, tz.name())
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn localize_bound(label: &str, raw: &str, tz: &TimezoneService) -> AppResult<DateTime<Utc>> {
    let naive = parse_window_datetime(raw).ok_or_else(|| {
        AppError::Window(format!(
            "{label} '{raw}' is not a valid 'YYYY-MM-DD HH:MM:SS' datetime"
        ))
    })?;

    tz.localize(naive)
}
