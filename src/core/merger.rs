//! Interval merger: union measure of one participant's clipped sessions.

use crate::models::Session;
use chrono::{DateTime, TimeDelta, Utc};

/// A disjoint attendance interval produced by the merge sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Sweeps the intervals in start order, folding every interval that starts
/// strictly before the running end into it. Touching intervals stay separate;
/// the summed duration is the same either way.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::new();
    for iv in sorted {
        if let Some(current) = merged.last_mut()
            && iv.start < current.end
        {
            // contained intervals leave the running end untouched
            if iv.end > current.end {
                current.end = iv.end;
            }
            continue;
        }
        merged.push(iv);
    }

    merged
}

/// Total engaged time of one participant. A single session yields its own
/// clipped duration; an empty slice yields zero.
pub fn merge_participant_sessions(sessions: &[&Session]) -> TimeDelta {
    let intervals: Vec<Interval> = sessions
        .iter()
        .map(|s| Interval {
            start: s.trunc_joined,
            end: s.trunc_left,
        })
        .collect();

    merge_intervals(&intervals)
        .iter()
        .map(Interval::duration)
        .fold(TimeDelta::zero(), |acc, d| acc + d)
}
