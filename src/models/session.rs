use super::event::ActionRecord;
use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Classification of a session relative to the event window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Validation {
    Valid,
    LeftEarly,
    JoinedLate,
}

impl Validation {
    /// Label used in the `Sessions` table.
    pub fn label(&self) -> &'static str {
        match self {
            Validation::Valid => "Valid",
            Validation::LeftEarly => "Left early",
            Validation::JoinedLate => "Joined late",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Both chosen sides of one session id. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionEndpoint {
    pub joined: Option<ActionRecord>,
    pub left: Option<ActionRecord>,
}

impl SessionEndpoint {
    /// Identity fields come from the Joined side, falling back to the Left side.
    pub fn identity(&self) -> Option<&ActionRecord> {
        self.joined.as_ref().or(self.left.as_ref())
    }
}

/// A paired, clipped and classified session.
///
/// `trunc_joined <= trunc_left` holds for every value built by the pairer.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub session_id: String,
    pub participant_id: Option<String>,
    pub full_name: String,
    pub role: String,
    pub user_agent: String,
    pub joined_at: Option<DateTime<Utc>>,
    pub left_at: Option<DateTime<Utc>>,
    pub trunc_joined: DateTime<Utc>,
    pub trunc_left: DateTime<Utc>,
    pub local_trunc_joined: Option<DateTime<Tz>>,
    pub local_trunc_left: Option<DateTime<Tz>>,
    pub validation: Validation,
}

impl Session {
    /// Width of the clipped interval.
    pub fn duration(&self) -> TimeDelta {
        self.trunc_left - self.trunc_joined
    }

    pub fn has_participant(&self) -> bool {
        self.participant_id.is_some()
    }
}
