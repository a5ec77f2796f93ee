//! Record loader: engagement log CSV → ordered `Event`s.
//!
//! Rows keep their file order. Duplicate join/leave beacons are resolved later
//! by the action splitter, not by sorting here.

use crate::errors::{AppError, AppResult};
use crate::models::{Action, Event};
use crate::utils::time::parse_log_timestamp;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

pub const COL_SESSION_ID: &str = "Session Id";
pub const COL_PARTICIPANT_ID: &str = "Participant Id";
pub const COL_FULL_NAME: &str = "Full Name";
pub const COL_USER_AGENT: &str = "UserAgent";
pub const COL_TIMESTAMP: &str = "UTC Event Timestamp";
pub const COL_ACTION: &str = "Action";
pub const COL_ROLE: &str = "Role";

/// Position of every required column in the header row.
struct Columns {
    session_id: usize,
    participant_id: usize,
    full_name: usize,
    user_agent: usize,
    timestamp: usize,
    action: usize,
    role: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| -> AppResult<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AppError::Parse(format!("missing required column '{name}'")))
        };

        Ok(Self {
            session_id: find(COL_SESSION_ID)?,
            participant_id: find(COL_PARTICIPANT_ID)?,
            full_name: find(COL_FULL_NAME)?,
            user_agent: find(COL_USER_AGENT)?,
            timestamp: find(COL_TIMESTAMP)?,
            action: find(COL_ACTION)?,
            role: find(COL_ROLE)?,
        })
    }
}

pub fn load_events_from_path(path: &Path) -> AppResult<Vec<Event>> {
    let content = fs::read_to_string(path)?;
    load_events(&content)
}

/// Parses the whole log. Any missing column, unknown action or unparsable
/// timestamp aborts the load.
pub fn load_events(content: &str) -> AppResult<Vec<Event>> {
    let content = content.trim_start_matches('\u{feff}');

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let cols = Columns::from_headers(reader.headers()?)?;

    let mut events = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;

        // blank trailing lines
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        events.push(parse_record(&record, &cols, row)?);
    }

    Ok(events)
}

fn parse_record(record: &StringRecord, cols: &Columns, row: usize) -> AppResult<Event> {
    let field = |i: usize| record.get(i).map(str::trim).unwrap_or("");

    let session_id = field(cols.session_id);
    if session_id.is_empty() {
        return Err(AppError::Parse(format!("row {row}: empty '{COL_SESSION_ID}'")));
    }

    let raw_ts = field(cols.timestamp);
    let timestamp = parse_log_timestamp(raw_ts).ok_or_else(|| {
        AppError::Parse(format!("row {row}: invalid '{COL_TIMESTAMP}' value '{raw_ts}'"))
    })?;

    let raw_action = field(cols.action);
    let action = Action::from_log_str(raw_action).ok_or_else(|| {
        AppError::Parse(format!("row {row}: unknown '{COL_ACTION}' value '{raw_action}'"))
    })?;

    let participant_id = Some(field(cols.participant_id))
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(Event {
        row,
        session_id: session_id.to_string(),
        participant_id,
        full_name: field(cols.full_name).to_string(),
        user_agent: field(cols.user_agent).to_string(),
        timestamp,
        action,
        role: field(cols.role).to_string(),
    })
}
