mod common;
use chrono::{Duration, Timelike};
use common::{at, record, utc, window};
use rattendance::core::TimezoneService;
use rattendance::core::pairer::{classify, clip, far_future, far_past, join_endpoints, pair_sessions};
use rattendance::models::{ActionRecord, EventWindow, Validation};
use std::collections::BTreeMap;

type Row<'a> = (&'a str, Option<&'a str>, &'a str, (u32, u32));

fn side(rows: &[Row]) -> BTreeMap<String, ActionRecord> {
    rows.iter()
        .map(|&(sid, pid, name, (h, m))| (sid.to_string(), record(pid, name, at(h, m))))
        .collect()
}

fn sides(
    joined: &[Row],
    left: &[Row],
) -> (BTreeMap<String, ActionRecord>, BTreeMap<String, ActionRecord>) {
    (side(joined), side(left))
}

#[test]
fn test_scenario_a_inside_window() {
    let (j, l) = sides(&[("s1", Some("p1"), "Ann", (9, 0))], &[("s1", Some("p1"), "Ann", (9, 30))]);
    let sessions = pair_sessions(&j, &l, &window(), &utc());

    assert_eq!(sessions.len(), 1);
    let s = &sessions[0];
    assert_eq!(s.trunc_joined, at(9, 0));
    assert_eq!(s.trunc_left, at(9, 30));
    assert_eq!(s.validation, Validation::Valid);
    assert_eq!(s.duration(), Duration::minutes(30));
}

#[test]
fn test_scenario_b_left_early() {
    let (j, l) = sides(&[("s2", Some("p1"), "Ann", (8, 0))], &[("s2", Some("p1"), "Ann", (8, 30))]);
    let s = &pair_sessions(&j, &l, &window(), &utc())[0];

    assert_eq!(s.trunc_left, at(8, 30));
    assert_eq!(s.validation, Validation::LeftEarly);
    assert_eq!(s.duration(), Duration::zero());
}

#[test]
fn test_joined_late() {
    let (j, l) = sides(&[("s7", Some("p1"), "Ann", (10, 15))], &[("s7", Some("p1"), "Ann", (10, 45))]);
    let s = &pair_sessions(&j, &l, &window(), &utc())[0];

    assert_eq!(s.trunc_joined, at(10, 15));
    assert_eq!(s.trunc_left, at(10, 15));
    assert_eq!(s.validation, Validation::JoinedLate);
    assert_eq!(s.duration(), Duration::zero());
}

#[test]
fn test_scenario_d_missing_left_uses_window_end() {
    let (j, l) = sides(&[("s6", Some("p1"), "Ann", (9, 45))], &[]);
    let s = &pair_sessions(&j, &l, &window(), &utc())[0];

    assert!(s.left_at.is_none());
    assert_eq!(s.joined_at, Some(at(9, 45)));
    assert_eq!(s.trunc_joined, at(9, 45));
    assert_eq!(s.trunc_left, at(10, 0));
    assert_eq!(s.validation, Validation::Valid);
}

#[test]
fn test_missing_joined_uses_window_start() {
    let (j, l) = sides(&[], &[("s9", Some("p9"), "Zoe", (9, 20))]);
    let s = &pair_sessions(&j, &l, &window(), &utc())[0];

    assert!(s.joined_at.is_none());
    assert_eq!(s.trunc_joined, at(9, 0));
    assert_eq!(s.trunc_left, at(9, 20));
    assert_eq!(s.validation, Validation::Valid);

    // identity comes from the Left side
    assert_eq!(s.participant_id.as_deref(), Some("p9"));
    assert_eq!(s.full_name, "Zoe");
}

#[test]
fn test_missing_joined_and_left_before_window() {
    let (j, l) = sides(&[], &[("s9", Some("p9"), "Zoe", (8, 20))]);
    let s = &pair_sessions(&j, &l, &window(), &utc())[0];

    assert_eq!(s.trunc_joined, at(8, 20));
    assert_eq!(s.trunc_left, at(8, 20));
    assert_eq!(s.validation, Validation::LeftEarly);
}

#[test]
fn test_session_spanning_whole_window() {
    let (j, l) = sides(&[("s1", Some("p1"), "Ann", (8, 0))], &[("s1", Some("p1"), "Ann", (11, 0))]);
    let s = &pair_sessions(&j, &l, &window(), &utc())[0];

    assert_eq!(s.trunc_joined, at(9, 0));
    assert_eq!(s.trunc_left, at(10, 0));
    assert_eq!(s.validation, Validation::Valid);
}

#[test]
fn test_left_before_joined_collapses_to_zero() {
    let (tj, tl) = clip(at(9, 40), at(9, 10), &window());
    assert!(tj <= tl);
    assert_eq!(tl - tj, Duration::zero());
}

#[test]
fn test_outer_join_orders_by_session_id() {
    let (j, l) = sides(
        &[("b", Some("p1"), "Ann", (9, 0)), ("a", Some("p2"), "Ben", (9, 5))],
        &[("c", Some("p3"), "Cid", (9, 30)), ("a", Some("p2"), "Ben", (9, 35))],
    );

    let endpoints = join_endpoints(&j, &l);
    let ids: Vec<&str> = endpoints.keys().map(String::as_str).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert!(endpoints["a"].joined.is_some() && endpoints["a"].left.is_some());
    assert!(endpoints["b"].left.is_none());
    assert!(endpoints["c"].joined.is_none());

    let sessions = pair_sessions(&j, &l, &window(), &utc());
    let ids: Vec<&str> = sessions.iter().map(|s| s.session_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_clipping_invariant_and_validity_partition() {
    let w = window();
    let mut points = vec![far_past(), far_future()];
    for h in 7..=12 {
        for m in [0, 30] {
            points.push(at(h, m));
        }
    }

    for &joined in &points {
        for &left in points.iter().filter(|&&l| l >= joined) {
            let (tj, tl) = clip(joined, left, &w);
            assert!(tj <= tl, "clip({joined}, {left}) = ({tj}, {tl})");

            let overlaps = joined <= w.end && left >= w.start;
            if overlaps {
                assert!(w.contains(tj) && w.contains(tl), "clip({joined}, {left}) left the window");
            }

            let v = classify(tj, tl, &w);
            assert_eq!(v == Validation::LeftEarly, tl < w.start);
            assert_eq!(v == Validation::JoinedLate, tl >= w.start && tj > w.end);
            assert_eq!(v == Validation::Valid, overlaps);
        }
    }
}

#[test]
fn test_local_columns_only_outside_utc() {
    let (j, l) = sides(&[("s1", Some("p1"), "Ann", (9, 0))], &[("s1", Some("p1"), "Ann", (9, 30))]);

    let utc_sessions = pair_sessions(&j, &l, &window(), &utc());
    assert!(utc_sessions[0].local_trunc_joined.is_none());

    let gmt = TimezoneService::new("GMT").unwrap();
    let gmt_sessions = pair_sessions(&j, &l, &window(), &gmt);
    assert!(gmt_sessions[0].local_trunc_left.is_none());

    let sp = TimezoneService::new("America/Sao_Paulo").unwrap();
    let w = EventWindow::new(at(9, 0), at(10, 0), sp.name()).unwrap();
    let s = &pair_sessions(&j, &l, &w, &sp)[0];

    let local = s.local_trunc_joined.expect("local column");
    assert_eq!(local.hour(), 6);
    assert_eq!(local.with_timezone(&chrono::Utc), s.trunc_joined);
    assert_eq!(s.local_trunc_left.map(|d| d.hour()), Some(6));
}

#[test]
fn test_validation_labels() {
    assert_eq!(Validation::Valid.label(), "Valid");
    assert_eq!(Validation::LeftEarly.label(), "Left early");
    assert_eq!(Validation::JoinedLate.label(), "Joined late");
}
