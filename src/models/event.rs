use chrono::{DateTime, Utc};
use serde::Serialize;

/// Action column of the engagement log.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Action {
    Joined,
    Left,
}

impl Action {
    pub fn from_log_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Joined" => Some(Self::Joined),
            "Left" => Some(Self::Left),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Joined => "Joined",
            Action::Left => "Left",
        }
    }
}

/// One line of the attendee engagement log.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub row: usize,                     // ⇔ 1-based record number in the input file
    pub session_id: String,             // ⇔ "Session Id"
    pub participant_id: Option<String>, // ⇔ "Participant Id" (empty for anonymous joins)
    pub full_name: String,              // ⇔ "Full Name"
    pub user_agent: String,             // ⇔ "UserAgent"
    pub timestamp: DateTime<Utc>,       // ⇔ "UTC Event Timestamp"
    pub action: Action,                 // ⇔ "Action"
    pub role: String,                   // ⇔ "Role"
}

impl Event {
    /// Projects the event onto the per-session side kept by the action splitter.
    pub fn to_action_record(&self) -> ActionRecord {
        ActionRecord {
            participant_id: self.participant_id.clone(),
            full_name: self.full_name.clone(),
            role: self.role.clone(),
            user_agent: self.user_agent.clone(),
            at: self.timestamp,
        }
    }
}

/// The single Joined (or Left) event retained for a session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub participant_id: Option<String>,
    pub full_name: String,
    pub role: String,
    pub user_agent: String,
    pub at: DateTime<Utc>,
}
