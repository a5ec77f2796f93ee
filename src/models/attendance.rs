use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Per-participant engaged time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    pub participant_id: String,
    pub full_name: String,
    pub role: String,
    pub attendance_minutes: f64,
}

/// Which sessions contribute to a participant's total.
///
/// `Inclusive` counts every session; out-of-window sessions are clipped to
/// zero width so they add nothing. `ValidOnly` drops LeftEarly/JoinedLate
/// sessions before grouping, so a participant with no valid session gets no row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AttendancePolicy {
    #[default]
    Inclusive,
    ValidOnly,
}

impl AttendancePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendancePolicy::Inclusive => "inclusive",
            AttendancePolicy::ValidOnly => "valid_only",
        }
    }
}
