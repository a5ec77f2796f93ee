//! Session pairer: outer-joins the Joined/Left sides of every session id,
//! clips the result to the event window and classifies it.

use crate::core::timezone::TimezoneService;
use crate::models::{ActionRecord, EventWindow, Session, SessionEndpoint, Validation};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Stand-in for a missing Left event: still connected when the log ends.
pub fn far_future() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2199, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Stand-in for a missing Joined event: already connected when the log starts.
pub fn far_past() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Outer join on session id. Sessions present on only one side are kept.
pub fn join_endpoints(
    joined: &BTreeMap<String, ActionRecord>,
    left: &BTreeMap<String, ActionRecord>,
) -> BTreeMap<String, SessionEndpoint> {
    let mut endpoints: BTreeMap<String, SessionEndpoint> = BTreeMap::new();

    for (id, rec) in joined {
        endpoints.entry(id.clone()).or_default().joined = Some(rec.clone());
    }
    for (id, rec) in left {
        endpoints.entry(id.clone()).or_default().left = Some(rec.clone());
    }

    endpoints
}

/// Clips `[joined_at, left_at]` to the window.
///
/// Returns `(trunc_joined, trunc_left)` with `trunc_joined <= trunc_left`.
/// An interval lying entirely before the window collapses onto its left
/// bound, one entirely after collapses onto its joined bound.
pub fn clip(
    joined_at: DateTime<Utc>,
    left_at: DateTime<Utc>,
    window: &EventWindow,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let trunc_joined = joined_at.max(left_at.min(window.start));
    let trunc_left = left_at.min(joined_at.max(window.end));

    // left before join in the raw data: zero width
    (trunc_joined, trunc_left.max(trunc_joined))
}

pub fn classify(
    trunc_joined: DateTime<Utc>,
    trunc_left: DateTime<Utc>,
    window: &EventWindow,
) -> Validation {
    if trunc_left < window.start {
        Validation::LeftEarly
    } else if trunc_joined > window.end {
        Validation::JoinedLate
    } else {
        Validation::Valid
    }
}

/// Builds one `Session` per session id, ordered by session id.
pub fn pair_sessions(
    joined: &BTreeMap<String, ActionRecord>,
    left: &BTreeMap<String, ActionRecord>,
    window: &EventWindow,
    tz: &TimezoneService,
) -> Vec<Session> {
    join_endpoints(joined, left)
        .into_iter()
        .filter_map(|(id, endpoint)| build_session(id, &endpoint, window, tz))
        .collect()
}

fn build_session(
    session_id: String,
    endpoint: &SessionEndpoint,
    window: &EventWindow,
    tz: &TimezoneService,
) -> Option<Session> {
    let identity = endpoint.identity()?;

    let joined_at = endpoint.joined.as_ref().map(|r| r.at);
    let left_at = endpoint.left.as_ref().map(|r| r.at);

    let (trunc_joined, trunc_left) = clip(
        joined_at.unwrap_or_else(far_past),
        left_at.unwrap_or_else(far_future),
        window,
    );

    Some(Session {
        session_id,
        participant_id: identity.participant_id.clone(),
        full_name: identity.full_name.clone(),
        role: identity.role.clone(),
        user_agent: identity.user_agent.clone(),
        joined_at,
        left_at,
        trunc_joined,
        trunc_left,
        local_trunc_joined: tz.to_local(trunc_joined),
        local_trunc_left: tz.to_local(trunc_left),
        validation: classify(trunc_joined, trunc_left, window),
    })
}
