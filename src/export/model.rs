// src/export/model.rs

use crate::core::AttendanceReport;
use crate::models::{AttendanceRecord, Event, Session};
use crate::utils::time::format_naive;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

pub const SHEET_ORIGINAL: &str = "Original";
pub const SHEET_SESSIONS: &str = "Sessions";
pub const SHEET_ATTENDANCE: &str = "Attendance";

/// Typed cell, so identifiers that look numeric are never coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
    Empty,
}

impl Cell {
    fn opt_text(v: Option<&str>) -> Self {
        v.map(|s| Cell::Text(s.to_string())).unwrap_or(Cell::Empty)
    }

    fn opt_datetime(v: Option<NaiveDateTime>) -> Self {
        v.map(Cell::DateTime).unwrap_or(Cell::Empty)
    }

    /// Flat text rendering (CSV, console).
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::DateTime(dt) => format_naive(dt),
            Cell::Empty => String::new(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::DateTime(dt) => Value::String(format_naive(dt)),
            Cell::Empty => Value::Null,
        }
    }
}

/// One output table: a sheet in XLSX, a file in CSV, an array in JSON.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Rows as `{header: value}` objects.
    pub fn to_json_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = self
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(h, c)| (h.to_string(), c.to_json()))
                    .collect();
                Value::Object(obj)
            })
            .collect()
    }
}

/// The raw log, UTC timestamps rendered timezone-naive.
pub fn original_sheet(events: &[Event]) -> Sheet {
    let rows = events
        .iter()
        .map(|e| {
            vec![
                Cell::Number(e.row as f64),
                Cell::Text(e.session_id.clone()),
                Cell::opt_text(e.participant_id.as_deref()),
                Cell::Text(e.full_name.clone()),
                Cell::Text(e.user_agent.clone()),
                Cell::DateTime(e.timestamp.naive_utc()),
                Cell::Text(e.action.as_str().to_string()),
                Cell::Text(e.role.clone()),
            ]
        })
        .collect();

    Sheet {
        name: SHEET_ORIGINAL,
        headers: vec![
            "Row",
            "SessionId",
            "ParticipantId",
            "FullName",
            "UserAgent",
            "UtcEventTimestamp",
            "Action",
            "Role",
        ],
        rows,
    }
}

/// Paired sessions. Local columns only when the zone is not UTC/GMT.
pub fn sessions_sheet(sessions: &[Session], with_local: bool) -> Sheet {
    let mut headers = vec![
        "SessionId",
        "ParticipantId",
        "FullName",
        "Role",
        "UserAgent",
        "Joined",
        "Left",
        "TruncJoined",
        "TruncLeft",
    ];
    if with_local {
        headers.extend(["LocalTruncJoined", "LocalTruncLeft"]);
    }
    headers.push("Validation");

    let rows = sessions
        .iter()
        .map(|s| {
            let mut row = vec![
                Cell::Text(s.session_id.clone()),
                Cell::opt_text(s.participant_id.as_deref()),
                Cell::Text(s.full_name.clone()),
                Cell::Text(s.role.clone()),
                Cell::Text(s.user_agent.clone()),
                Cell::opt_datetime(s.joined_at.map(|d| d.naive_utc())),
                Cell::opt_datetime(s.left_at.map(|d| d.naive_utc())),
                Cell::DateTime(s.trunc_joined.naive_utc()),
                Cell::DateTime(s.trunc_left.naive_utc()),
            ];
            if with_local {
                row.push(Cell::opt_datetime(
                    s.local_trunc_joined.map(|d| d.naive_local()),
                ));
                row.push(Cell::opt_datetime(s.local_trunc_left.map(|d| d.naive_local())));
            }
            row.push(Cell::Text(s.validation.label().to_string()));
            row
        })
        .collect();

    Sheet {
        name: SHEET_SESSIONS,
        headers,
        rows,
    }
}

pub fn attendance_sheet(records: &[AttendanceRecord]) -> Sheet {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                Cell::Text(r.full_name.clone()),
                Cell::Text(r.participant_id.clone()),
                Cell::Text(r.role.clone()),
                Cell::Number(r.attendance_minutes),
            ]
        })
        .collect();

    Sheet {
        name: SHEET_ATTENDANCE,
        headers: vec!["FullName", "ParticipantId", "Role", "AttendanceInMinutes"],
        rows,
    }
}

/// The three output tables of a report, in export order.
pub fn report_sheets(report: &AttendanceReport) -> Vec<Sheet> {
    vec![
        original_sheet(&report.events),
        sessions_sheet(&report.sessions, report.has_local_columns()),
        attendance_sheet(&report.attendance),
    ]
}
