//! Report pipeline: load → split → pair → aggregate, plus the run summary.

use crate::core::aggregator::aggregate;
use crate::core::loader::{load_events, load_events_from_path};
use crate::core::pairer::pair_sessions;
use crate::core::splitter::split_by_action;
use crate::core::timezone::TimezoneService;
use crate::errors::AppResult;
use crate::models::{
    Action, ActionRecord, AttendancePolicy, AttendanceRecord, Event, EventWindow, Session,
    Validation,
};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Fully computed report. Built in one go; nothing is written until it exists.
#[derive(Debug, Clone)]
pub struct AttendanceReport {
    pub window: EventWindow,
    pub timezone: TimezoneService,
    pub policy: AttendancePolicy,
    pub events: Vec<Event>,
    pub joined: BTreeMap<String, ActionRecord>,
    pub left: BTreeMap<String, ActionRecord>,
    pub sessions: Vec<Session>,
    pub attendance: Vec<AttendanceRecord>,
}

impl AttendanceReport {
    pub fn from_path(
        path: &Path,
        window: EventWindow,
        timezone: TimezoneService,
        policy: AttendancePolicy,
    ) -> AppResult<Self> {
        let events = load_events_from_path(path)?;
        Ok(Self::from_events(events, window, timezone, policy))
    }

    pub fn from_csv_str(
        content: &str,
        window: EventWindow,
        timezone: TimezoneService,
        policy: AttendancePolicy,
    ) -> AppResult<Self> {
        let events = load_events(content)?;
        Ok(Self::from_events(events, window, timezone, policy))
    }

    pub fn from_events(
        events: Vec<Event>,
        window: EventWindow,
        timezone: TimezoneService,
        policy: AttendancePolicy,
    ) -> Self {
        let joined = split_by_action(&events, Action::Joined);
        let left = split_by_action(&events, Action::Left);
        let sessions = pair_sessions(&joined, &left, &window, &timezone);
        let attendance = aggregate(&sessions, policy);

        Self {
            window,
            timezone,
            policy,
            events,
            joined,
            left,
            sessions,
            attendance,
        }
    }

    /// Whether the `Sessions` table carries local display columns.
    pub fn has_local_columns(&self) -> bool {
        !self.timezone.is_utc()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_report(self)
    }
}

/// Counters printed after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub rows: usize,
    pub joined_rows: usize,
    pub first_joined: Option<DateTime<Utc>>,
    pub last_joined: Option<DateTime<Utc>>,
    pub left_rows: usize,
    pub first_left: Option<DateTime<Utc>>,
    pub last_left: Option<DateTime<Utc>>,
    pub unique_sessions: usize,
    pub left_early: usize,
    pub joined_late: usize,
    pub without_participant: usize,
    pub unique_participants: usize,
}

impl ReportSummary {
    pub fn from_report(report: &AttendanceReport) -> Self {
        let count = |v: Validation| report.sessions.iter().filter(|s| s.validation == v).count();

        let unique_sessions = report
            .events
            .iter()
            .map(|e| e.session_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        let unique_participants = report
            .sessions
            .iter()
            .filter_map(|s| s.participant_id.as_deref())
            .collect::<HashSet<_>>()
            .len();

        Self {
            window_start: report.window.start,
            window_end: report.window.end,
            rows: report.events.len(),
            joined_rows: report.joined.len(),
            first_joined: report.joined.values().map(|r| r.at).min(),
            last_joined: report.joined.values().map(|r| r.at).max(),
            left_rows: report.left.len(),
            first_left: report.left.values().map(|r| r.at).min(),
            last_left: report.left.values().map(|r| r.at).max(),
            unique_sessions,
            left_early: count(Validation::LeftEarly),
            joined_late: count(Validation::JoinedLate),
            without_participant: report.sessions.iter().filter(|s| !s.has_participant()).count(),
            unique_participants,
        }
    }

    /// `(label, value)` sections, in print order.
    pub fn sections(&self) -> Vec<Vec<(&'static str, String)>> {
        let ts = |dt: Option<DateTime<Utc>>| {
            dt.map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        vec![
            vec![
                ("Informed event start", ts(Some(self.window_start))),
                ("Informed event end", ts(Some(self.window_end))),
            ],
            vec![("Rows", self.rows.to_string())],
            vec![
                ("Joined rows", self.joined_rows.to_string()),
                (" - First at", ts(self.first_joined)),
                (" - Last at", ts(self.last_joined)),
            ],
            vec![
                ("Left rows", self.left_rows.to_string()),
                (" - First at", ts(self.first_left)),
                (" - Last at", ts(self.last_left)),
            ],
            vec![
                ("Unique sessions", self.unique_sessions.to_string()),
                (" - Left before event start", self.left_early.to_string()),
                (" - Joined after event end", self.joined_late.to_string()),
                (" - Without Participant Id", self.without_participant.to_string()),
            ],
            vec![("Unique participants", self.unique_participants.to_string())],
        ]
    }
}
