use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SessionId;

/// A scheduled voting window, managed from the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingSession {
    /// Session unique ID.
    pub id: SessionId,
    /// Display name, e.g. "Spring Elections 2026".
    pub name: String,
    /// Scheduled start.
    pub start_date: DateTime<Utc>,
    /// Scheduled end.
    pub end_date: DateTime<Utc>,
    /// Lifecycle status.
    pub status: SessionStatus,
}

/// Lifecycle of a voting session. Any status may be set to any other:
/// admins are trusted to correct mistakes, so no transition is ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Scheduled but not yet open.
    Pending,
    /// Open for voting.
    Active,
    /// Temporarily suspended.
    Paused,
    /// Finished.
    Closed,
}

impl Display for SessionStatus {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Active => write!(f, "Active"),
            Self::Paused => write!(f, "Paused"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// Example data for use in tests.
#[cfg(test)]
mod examples {
    use chrono::TimeZone;

    use super::*;

    impl VotingSession {
        pub fn example_active() -> Self {
            Self {
                id: "session1".to_string(),
                name: "Spring Elections 2024".to_string(),
                start_date: Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap(),
                end_date: Utc.with_ymd_and_hms(2024, 3, 12, 17, 0, 0).unwrap(),
                status: SessionStatus::Active,
            }
        }

        pub fn example_closed() -> Self {
            Self {
                id: "session2".to_string(),
                name: "Fall Referendum 2023".to_string(),
                start_date: Utc.with_ymd_and_hms(2023, 10, 5, 9, 0, 0).unwrap(),
                end_date: Utc.with_ymd_and_hms(2023, 10, 7, 17, 0, 0).unwrap(),
                status: SessionStatus::Closed,
            }
        }

        pub fn example_pending() -> Self {
            Self {
                id: "session3".to_string(),
                name: "Summer Council Vote".to_string(),
                start_date: Utc.with_ymd_and_hms(2024, 6, 20, 9, 0, 0).unwrap(),
                end_date: Utc.with_ymd_and_hms(2024, 6, 22, 17, 0, 0).unwrap(),
                status: SessionStatus::Pending,
            }
        }
    }
}
