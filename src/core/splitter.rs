//! Action splitter: one Joined and one Left record per session id.

use crate::models::{Action, ActionRecord, Event};
use std::collections::BTreeMap;

/// Filters `events` to `action` and keeps one record per session id:
/// the first Joined and the last Left, in file order.
///
/// Reconnects and retried beacons produce duplicates; first-join/last-leave
/// yields the widest honest bound for the session.
pub fn split_by_action(events: &[Event], action: Action) -> BTreeMap<String, ActionRecord> {
    let mut by_session: BTreeMap<String, ActionRecord> = BTreeMap::new();

    for ev in events.iter().filter(|e| e.action == action) {
        match action {
            Action::Joined => {
                by_session
                    .entry(ev.session_id.clone())
                    .or_insert_with(|| ev.to_action_record());
            }
            Action::Left => {
                by_session.insert(ev.session_id.clone(), ev.to_action_record());
            }
        }
    }

    by_session
}
