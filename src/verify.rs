//! Voter verification against the roster.
//!
//! Three checks run in order: the ID exists, the entered name matches the
//! registered name, the student is eligible. The first failure stops the
//! sequence; later flags are left false rather than computed.

use serde::Serialize;

use crate::model::StudentStatus;
use crate::store::RosterStore;

/// The outcome of a verification attempt, flags plus user-facing feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    /// The entered ID exists on the roster.
    pub is_student_id_found: bool,
    /// The entered name matches the registered name.
    pub is_name_match: bool,
    /// The student's status is `Eligible`.
    pub is_eligible: bool,
    /// All three checks passed.
    pub overall_validation: bool,
    /// One sentence for the verification screen.
    pub feedback: String,
    /// The registered name, once the name check has passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_student_name: Option<String>,
    /// The registered status, once the name check has passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_student_status: Option<StudentStatus>,
}

/// Whether an entered name matches a registered one. Case and surrounding
/// whitespace are the voter's business, not a mismatch.
pub fn names_match(entered: &str, registered: &str) -> bool {
    entered.trim().to_lowercase() == registered.trim().to_lowercase()
}

/// Check an entered ID and name against the roster.
///
/// This only reports; it never mutates the roster or the tally. The caller
/// decides what a failed outcome means for the flow.
pub fn verify_student(roster: &RosterStore, student_id: &str, name: &str) -> VerificationOutcome {
    let Some(student) = roster.find_by_id(student_id.trim()) else {
        return VerificationOutcome {
            feedback: "Student ID not found in the system.".to_string(),
            ..VerificationOutcome::default()
        };
    };

    if !names_match(name, &student.name) {
        // The registered name is not echoed back on a mismatch.
        return VerificationOutcome {
            is_student_id_found: true,
            feedback: "Student ID found, but the provided name does not match our records. \
                       Please check your full name."
                .to_string(),
            ..VerificationOutcome::default()
        };
    }

    if student.status != StudentStatus::Eligible {
        return VerificationOutcome {
            is_student_id_found: true,
            is_name_match: true,
            feedback: format!(
                "Student ID and name match, but this student is not currently eligible to vote. \
                 Status: {}.",
                student.status
            ),
            verified_student_name: Some(student.name),
            verified_student_status: Some(student.status),
            ..VerificationOutcome::default()
        };
    }

    VerificationOutcome {
        is_student_id_found: true,
        is_name_match: true,
        is_eligible: true,
        overall_validation: true,
        feedback: "Verification successful. Proceed to vote.".to_string(),
        verified_student_name: Some(student.name),
        verified_student_status: Some(student.status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;

    fn roster() -> RosterStore {
        RosterStore::new(vec![
            Student::example_alice(),
            Student::example_voted(),
            Student::example_ineligible(),
        ])
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        assert!(names_match("  alice JOHNSON ", "Alice Johnson"));
        assert!(!names_match("Alice Johnsen", "Alice Johnson"));
    }

    #[test]
    fn an_eligible_student_passes_all_checks() {
        let outcome = verify_student(&roster(), "S1001", "alice johnson");
        assert!(outcome.overall_validation);
        assert!(outcome.is_student_id_found && outcome.is_name_match && outcome.is_eligible);
        assert_eq!(outcome.feedback, "Verification successful. Proceed to vote.");
        assert_eq!(outcome.verified_student_name.as_deref(), Some("Alice Johnson"));
        assert_eq!(
            outcome.verified_student_status,
            Some(StudentStatus::Eligible)
        );
    }

    #[test]
    fn an_unknown_id_fails_with_every_flag_off() {
        let outcome = verify_student(&roster(), "S9999", "Alice Johnson");
        assert_eq!(outcome.feedback, "Student ID not found in the system.");
        assert!(!outcome.is_student_id_found);
        assert!(!outcome.is_name_match);
        assert!(!outcome.is_eligible);
        assert!(!outcome.overall_validation);
        assert_eq!(outcome.verified_student_name, None);
    }

    #[test]
    fn a_wrong_name_stops_before_the_eligibility_check() {
        // S1004 is ineligible, but with a wrong name that is never reached.
        let outcome = verify_student(&roster(), "S1004", "Someone Else");
        assert!(outcome.is_student_id_found);
        assert!(!outcome.is_name_match);
        assert!(!outcome.is_eligible);
        assert!(!outcome.overall_validation);
        assert_eq!(
            outcome.feedback,
            "Student ID found, but the provided name does not match our records. \
             Please check your full name."
        );
        assert_eq!(outcome.verified_student_name, None);
        assert_eq!(outcome.verified_student_status, None);
    }

    #[test]
    fn a_voted_student_is_reported_with_their_status() {
        let outcome = verify_student(&roster(), "S1003", "Chloe Tan");
        assert!(outcome.is_student_id_found && outcome.is_name_match);
        assert!(!outcome.is_eligible);
        assert!(!outcome.overall_validation);
        assert_eq!(
            outcome.feedback,
            "Student ID and name match, but this student is not currently eligible to vote. \
             Status: Voted."
        );
        assert_eq!(outcome.verified_student_status, Some(StudentStatus::Voted));
    }

    #[test]
    fn an_ineligible_student_is_reported_with_their_status() {
        let outcome = verify_student(&roster(), "S1004", "Dev Patel");
        assert_eq!(
            outcome.feedback,
            "Student ID and name match, but this student is not currently eligible to vote. \
             Status: Ineligible."
        );
    }
}
