//! Timezone conversion service.
//!
//! All comparisons happen in UTC; the configured zone is only used to turn the
//! window's wall-clock bounds into instants and to render display columns.

use crate::errors::{AppError, AppResult};
use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneService {
    tz: Tz,
}

impl TimezoneService {
    /// Resolves an IANA name such as `America/Sao_Paulo`.
    pub fn new(name: &str) -> AppResult<Self> {
        let tz: Tz = name
            .trim()
            .parse()
            .map_err(|_| AppError::Timezone(name.to_string()))?;
        Ok(Self { tz })
    }

    pub fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// UTC and GMT get no local display columns.
    pub fn is_utc(&self) -> bool {
        matches!(self.tz, Tz::UTC | Tz::GMT | Tz::Etc__UTC | Tz::Etc__GMT)
    }

    /// Interprets a wall-clock time in this zone. An ambiguous time (DST
    /// fall-back) resolves to the later, standard-time instant.
    pub fn localize(&self, naive: NaiveDateTime) -> AppResult<DateTime<Utc>> {
        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(_, later) => Ok(later.with_timezone(&Utc)),
            LocalResult::None => Err(AppError::Window(format!(
                "{} does not exist in timezone {}",
                naive.format("%Y-%m-%d %H:%M:%S"),
                self.name()
            ))),
        }
    }

    /// Display-only rendering; `None` when the zone is UTC/GMT.
    pub fn to_local(&self, instant: DateTime<Utc>) -> Option<DateTime<Tz>> {
        if self.is_utc() {
            None
        } else {
            Some(instant.with_timezone(&self.tz))
        }
    }
}

impl Default for TimezoneService {
    fn default() -> Self {
        Self::utc()
    }
}
