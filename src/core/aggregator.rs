//! Attendance aggregator: one summary row per participant id.

use crate::core::merger::merge_participant_sessions;
use crate::models::{AttendancePolicy, AttendanceRecord, Session};
use crate::utils::time::round_minutes;
use std::collections::HashMap;

/// Groups sessions by participant id, preserving first-appearance order.
/// Sessions without a participant id are skipped.
pub fn group_by_participant<'a>(
    sessions: &'a [Session],
    policy: AttendancePolicy,
) -> Vec<(&'a str, Vec<&'a Session>)> {
    let mut groups: Vec<(&str, Vec<&Session>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    let eligible = sessions.iter().filter(|s| match policy {
        AttendancePolicy::Inclusive => true,
        AttendancePolicy::ValidOnly => s.validation.is_valid(),
    });

    for session in eligible {
        let Some(pid) = session.participant_id.as_deref() else {
            continue;
        };

        match index.get(pid).copied() {
            Some(i) => groups[i].1.push(session),
            None => {
                index.insert(pid, groups.len());
                groups.push((pid, vec![session]));
            }
        }
    }

    groups
}

/// Builds the attendance table, sorted by full name (stable).
pub fn aggregate(sessions: &[Session], policy: AttendancePolicy) -> Vec<AttendanceRecord> {
    let mut records: Vec<AttendanceRecord> = group_by_participant(sessions, policy)
        .into_iter()
        .map(|(pid, group)| {
            // name and role from the participant's first session
            let first = group[0];
            AttendanceRecord {
                participant_id: pid.to_string(),
                full_name: first.full_name.clone(),
                role: first.role.clone(),
                attendance_minutes: round_minutes(merge_participant_sessions(&group)),
            }
        })
        .collect();

    records.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    records
}
