mod common;
use common::{SAMPLE_LOG, at, utc, window, write_log};
use rattendance::core::AttendanceReport;
use rattendance::export::{Cell, report_sheets};
use rattendance::models::{AttendancePolicy, Validation};
use std::path::Path;

fn sample_report(policy: AttendancePolicy) -> AttendanceReport {
    AttendanceReport::from_csv_str(SAMPLE_LOG, window(), utc(), policy).expect("build report")
}

#[test]
fn test_sample_sessions() {
    let report = sample_report(AttendancePolicy::Inclusive);

    let ids: Vec<&str> = report.sessions.iter().map(|s| s.session_id.as_str()).collect();
    assert_eq!(ids, ["s1", "s2", "s3", "s4", "s5", "s6", "s7"]);

    let v: Vec<Validation> = report.sessions.iter().map(|s| s.validation).collect();
    assert_eq!(
        v,
        [
            Validation::Valid,
            Validation::Valid,
            Validation::Valid,
            Validation::LeftEarly,
            Validation::Valid,
            Validation::Valid,
            Validation::JoinedLate,
        ]
    );

    let bruno = &report.sessions[2];
    assert_eq!(bruno.joined_at, Some(at(8, 50)));
    assert_eq!(bruno.left_at, Some(at(9, 30)));
    assert_eq!(bruno.trunc_joined, at(9, 0));

    for s in &report.sessions {
        assert!(s.trunc_joined <= s.trunc_left);
    }
}

#[test]
fn test_sample_attendance_inclusive() {
    let report = sample_report(AttendancePolicy::Inclusive);

    let rows: Vec<(&str, f64)> = report
        .attendance
        .iter()
        .map(|r| (r.full_name.as_str(), r.attendance_minutes))
        .collect();

    assert_eq!(
        rows,
        [
            ("Alice Rossi", 50.0),
            ("Bruno Verdi", 30.0),
            ("Carla Neri", 0.0),
            ("Dario Blu", 15.0),
            ("Elena Gialli", 0.0),
        ]
    );
}

#[test]
fn test_sample_attendance_valid_only() {
    let report = sample_report(AttendancePolicy::ValidOnly);
    let names: Vec<&str> = report.attendance.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, ["Alice Rossi", "Bruno Verdi", "Dario Blu"]);
}

#[test]
fn test_summary_counts() {
    let summary = sample_report(AttendancePolicy::Inclusive).summary();

    assert_eq!(summary.window_start, at(9, 0));
    assert_eq!(summary.window_end, at(10, 0));
    assert_eq!(summary.rows, 15);
    assert_eq!(summary.joined_rows, 7);
    assert_eq!(summary.first_joined, Some(at(8, 0)));
    assert_eq!(summary.last_joined, Some(at(10, 15)));
    assert_eq!(summary.left_rows, 6);
    assert_eq!(summary.first_left, Some(at(8, 30)));
    assert_eq!(summary.last_left, Some(at(10, 45)));
    assert_eq!(summary.unique_sessions, 7);
    assert_eq!(summary.left_early, 1);
    assert_eq!(summary.joined_late, 1);
    assert_eq!(summary.without_participant, 1);
    assert_eq!(summary.unique_participants, 5);

    let sections = summary.sections();
    assert_eq!(sections.len(), 6);
    assert_eq!(sections[1][0], ("Rows", "15".to_string()));
}

#[test]
fn test_report_from_path() {
    let path = write_log("report_from_path", SAMPLE_LOG);
    let report = AttendanceReport::from_path(
        Path::new(&path),
        window(),
        utc(),
        AttendancePolicy::Inclusive,
    )
    .expect("build report from file");
    assert_eq!(report.events.len(), 15);
}

#[test]
fn test_report_sheets_layout() {
    let report = sample_report(AttendancePolicy::Inclusive);
    let sheets = report_sheets(&report);

    let names: Vec<&str> = sheets.iter().map(|s| s.name).collect();
    assert_eq!(names, ["Original", "Sessions", "Attendance"]);

    assert_eq!(sheets[0].rows.len(), 15);
    assert_eq!(sheets[1].rows.len(), 7);
    assert_eq!(sheets[2].rows.len(), 5);

    // no local columns for UTC
    assert!(!sheets[1].headers.contains(&"LocalTruncJoined"));
    assert_eq!(sheets[1].headers.last(), Some(&"Validation"));

    // s6 never left: blank Left cell, no sentinel exported
    let left_col = sheets[1].headers.iter().position(|h| *h == "Left").unwrap();
    assert_eq!(sheets[1].rows[5][left_col], Cell::Empty);

    assert_eq!(
        sheets[2].headers,
        ["FullName", "ParticipantId", "Role", "AttendanceInMinutes"]
    );
    assert_eq!(sheets[2].rows[0][3], Cell::Number(50.0));
}

#[test]
fn test_json_records_use_headers() {
    let report = sample_report(AttendancePolicy::Inclusive);
    let sheets = report_sheets(&report);

    let records = sheets[2].to_json_records();
    assert_eq!(records[0]["FullName"], "Alice Rossi");
    assert_eq!(records[0]["AttendanceInMinutes"], 50.0);

    let originals = sheets[0].to_json_records();
    assert_eq!(originals[0]["UtcEventTimestamp"], "2024-03-12 09:00:00");
    assert!(originals[5]["ParticipantId"].is_null());
}
