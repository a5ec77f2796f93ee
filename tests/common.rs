#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rattendance::core::TimezoneService;
use rattendance::models::{Action, ActionRecord, Event, EventWindow};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str =
    "Session Id,Participant Id,Full Name,UserAgent,UTC Event Timestamp,Action,Role";

/// Small log around a 09:00-10:00 UTC event on 2024-03-12.
///
/// - s1 Alice 09:00-09:40 and s2 Alice 09:20-09:50 (overlap, 50 min total)
/// - s3 Bruno joins twice and leaves twice (first join 08:50, last leave 09:30)
/// - s4 Carla left before the start
/// - s5 anonymous attendee, no Participant Id
/// - s6 Dario never leaves
/// - s7 Elena joins after the end
pub const SAMPLE_LOG: &str = "\
Session Id,Participant Id,Full Name,UserAgent,UTC Event Timestamp,Action,Role
s1,p-alice,Alice Rossi,Teams/1.6,2024-03-12T09:00:00Z,Joined,Attendee
s3,p-bruno,Bruno Verdi,Chrome/120,2024-03-12T08:50:00Z,Joined,Presenter
s4,p-carla,Carla Neri,Edge/119,2024-03-12T08:00:00Z,Joined,Attendee
s2,p-alice,Alice Rossi,Teams/1.6,2024-03-12T09:20:00Z,Joined,Attendee
s3,p-bruno,Bruno Verdi,Chrome/120,2024-03-12T08:55:00Z,Joined,Presenter
s5,,Guest User,Safari/17,2024-03-12T09:05:00Z,Joined,Attendee
s4,p-carla,Carla Neri,Edge/119,2024-03-12T08:30:00Z,Left,Attendee
s3,p-bruno,Bruno Verdi,Chrome/120,2024-03-12T09:10:00Z,Left,Presenter
s6,p-dario,Dario Blu,Teams/1.6,2024-03-12T09:45:00Z,Joined,Attendee
s1,p-alice,Alice Rossi,Teams/1.6,2024-03-12T09:40:00Z,Left,Attendee
s2,p-alice,Alice Rossi,Teams/1.6,2024-03-12T09:50:00Z,Left,Attendee
s3,p-bruno,Bruno Verdi,Chrome/120,2024-03-12T09:30:00Z,Left,Presenter
s5,,Guest User,Safari/17,2024-03-12T09:35:00Z,Left,Attendee
s7,p-elena,Elena Gialli,Firefox/121,2024-03-12T10:15:00Z,Joined,Attendee
s7,p-elena,Elena Gialli,Firefox/121,2024-03-12T10:45:00Z,Left,Attendee
";

pub fn rti() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// UTC instant on 2024-03-12.
pub fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 12, h, m, 0).unwrap()
}

/// 09:00-10:00 UTC on 2024-03-12.
pub fn window() -> EventWindow {
    EventWindow::new(at(9, 0), at(10, 0), "UTC").unwrap()
}

pub fn utc() -> TimezoneService {
    TimezoneService::utc()
}

pub fn naive(s: &str) -> chrono::NaiveDateTime {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
}

pub fn event(
    row: usize,
    session: &str,
    participant: Option<&str>,
    name: &str,
    action: Action,
    ts: DateTime<Utc>,
) -> Event {
    Event {
        row,
        session_id: session.to_string(),
        participant_id: participant.map(str::to_string),
        full_name: name.to_string(),
        user_agent: "Teams/1.6".to_string(),
        timestamp: ts,
        action,
        role: "Attendee".to_string(),
    }
}

pub fn record(participant: Option<&str>, name: &str, ts: DateTime<Utc>) -> ActionRecord {
    ActionRecord {
        participant_id: participant.map(str::to_string),
        full_name: name.to_string(),
        role: "Attendee".to_string(),
        user_agent: "Teams/1.6".to_string(),
        at: ts,
    }
}

/// Create a temporary output file path inside the temp dir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a unique CSV file in the temp dir and return its path
pub fn write_log(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_log.csv", name));
    fs::write(&path, content).expect("write log");
    path.to_string_lossy().to_string()
}

/// Path of a configuration file that does not exist yet
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
