use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::StudentId;

/// A student on the voting roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student unique ID, immutable once created.
    pub id: StudentId,
    /// Full name, as registered.
    pub name: String,
    /// Current eligibility.
    pub status: StudentStatus,
}

/// Eligibility of a student within the current election cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    /// May verify and vote.
    Eligible,
    /// Has voted this cycle. Only an explicit admin action moves a student
    /// back to `Eligible`, there is no automatic transition out.
    Voted,
    /// Barred from voting.
    Ineligible,
}

impl Display for StudentStatus {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Eligible => write!(f, "Eligible"),
            Self::Voted => write!(f, "Voted"),
            Self::Ineligible => write!(f, "Ineligible"),
        }
    }
}

/// Example data for use in tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Student {
        pub fn example_alice() -> Self {
            Self {
                id: "S1001".to_string(),
                name: "Alice Johnson".to_string(),
                status: StudentStatus::Eligible,
            }
        }

        pub fn example_brian() -> Self {
            Self {
                id: "S1002".to_string(),
                name: "Brian Murphy".to_string(),
                status: StudentStatus::Eligible,
            }
        }

        pub fn example_voted() -> Self {
            Self {
                id: "S1003".to_string(),
                name: "Chloe Tan".to_string(),
                status: StudentStatus::Voted,
            }
        }

        pub fn example_ineligible() -> Self {
            Self {
                id: "S1004".to_string(),
                name: "Dev Patel".to_string(),
                status: StudentStatus::Ineligible,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_json() {
        let student = Student::example_voted();
        let json = serde_json::to_string(&student).unwrap();
        assert!(json.contains(r#""status":"Voted""#));
        let back: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(back, student);
    }

    #[test]
    fn status_displays_as_plain_word() {
        assert_eq!(StudentStatus::Ineligible.to_string(), "Ineligible");
    }
}
