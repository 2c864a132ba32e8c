use log::debug;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::model::{Student, StudentStatus};

/// Owner of the student roster.
///
/// IDs are assigned by the registrar, not generated here, and are immutable:
/// updates match on ID and may change everything else.
#[derive(Debug, Default)]
pub struct RosterStore {
    students: Mutex<Vec<Student>>,
}

/// The first problem with a roster record, if any.
fn invalid_reason(student: &Student) -> Option<String> {
    if student.id.trim().is_empty() {
        return Some("student ID is empty".to_string());
    }
    if student.name.trim().is_empty() {
        return Some(format!("name is empty for ID '{}'", student.id));
    }
    None
}

impl RosterStore {
    pub fn new(initial: Vec<Student>) -> Self {
        Self {
            students: Mutex::new(initial),
        }
    }

    /// All students in roster order.
    pub fn list_students(&self) -> Vec<Student> {
        self.students.lock().clone()
    }

    pub fn find_by_id(&self, student_id: &str) -> Option<Student> {
        self.students
            .lock()
            .iter()
            .find(|s| s.id == student_id)
            .cloned()
    }

    /// Number of students currently eligible to vote.
    pub fn eligible_count(&self) -> u64 {
        self.students
            .lock()
            .iter()
            .filter(|s| s.status == StudentStatus::Eligible)
            .count() as u64
    }

    pub fn add_student(&self, student: Student) -> Result<()> {
        if let Some(reason) = invalid_reason(&student) {
            return Err(Error::validation(reason));
        }
        let mut students = self.students.lock();
        if students.iter().any(|s| s.id == student.id) {
            return Err(Error::Conflict(format!(
                "A student with ID '{}' already exists.",
                student.id
            )));
        }
        debug!("added student '{}' ({})", student.name, student.id);
        students.push(student);
        Ok(())
    }

    /// Replace the stored record matching `student.id`.
    pub fn update_student(&self, student: Student) -> Result<()> {
        if let Some(reason) = invalid_reason(&student) {
            return Err(Error::validation(reason));
        }
        let mut students = self.students.lock();
        let stored = students
            .iter_mut()
            .find(|s| s.id == student.id)
            .ok_or_else(|| Error::not_found(format!("Student with ID '{}'", student.id)))?;
        debug!("updating student '{}' ({})", student.name, student.id);
        *stored = student;
        Ok(())
    }

    /// Remove a student. Removing an unknown ID is a no-op.
    pub fn delete_student(&self, student_id: &str) {
        let mut students = self.students.lock();
        let before = students.len();
        students.retain(|s| s.id != student_id);
        if students.len() < before {
            debug!("deleted student '{}'", student_id);
        }
    }

    /// Return every `Voted` student to `Eligible`, in one step. Part of
    /// closing an election cycle; gives back the number restored.
    pub fn reset_voted(&self) -> u64 {
        let mut students = self.students.lock();
        let mut restored = 0;
        for student in students.iter_mut() {
            if student.status == StudentStatus::Voted {
                student.status = StudentStatus::Eligible;
                restored += 1;
            }
        }
        debug!("restored {} voted student(s) to eligible", restored);
        restored
    }

    pub fn set_status(&self, student_id: &str, status: StudentStatus) -> Result<()> {
        let mut students = self.students.lock();
        let stored = students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or_else(|| Error::not_found(format!("Student with ID '{}'", student_id)))?;
        debug!("student '{}' status set to {}", student_id, status);
        stored.status = status;
        Ok(())
    }

    /// Replace the whole roster in one step, as from a bulk import.
    ///
    /// The batch is validated completely before anything is touched: one bad
    /// record rejects the entire batch and leaves the current roster intact.
    pub fn replace_all(&self, students: Vec<Student>) -> Result<()> {
        let total = students.len();
        for (index, student) in students.iter().enumerate() {
            if let Some(reason) = invalid_reason(student) {
                return Err(Error::validation(format!(
                    "record {} of {}: {}",
                    index + 1,
                    total,
                    reason
                )));
            }
            if students[..index].iter().any(|s| s.id == student.id) {
                return Err(Error::validation(format!(
                    "record {} of {}: duplicate student ID '{}'",
                    index + 1,
                    total,
                    student.id
                )));
            }
        }
        debug!("roster replaced with {} student(s)", total);
        *self.students.lock() = students;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_examples() -> RosterStore {
        RosterStore::new(vec![
            Student::example_alice(),
            Student::example_brian(),
            Student::example_voted(),
            Student::example_ineligible(),
        ])
    }

    #[test]
    fn eligible_count_skips_voted_and_ineligible() {
        let store = store_with_examples();
        assert_eq!(store.eligible_count(), 2);
    }

    #[test]
    fn duplicate_id_is_a_conflict() {
        let store = store_with_examples();
        let err = store.add_student(Student::example_alice()).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(store.list_students().len(), 4);
    }

    #[test]
    fn update_matches_on_id() {
        let store = store_with_examples();
        let mut alice = Student::example_alice();
        alice.name = "Alice J. Johnson".to_string();
        store.update_student(alice).unwrap();
        assert_eq!(
            store.find_by_id("S1001").unwrap().name,
            "Alice J. Johnson"
        );

        let unknown = Student {
            id: "S9999".to_string(),
            name: "Ghost".to_string(),
            status: StudentStatus::Eligible,
        };
        assert!(matches!(
            store.update_student(unknown),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn delete_is_silent_for_unknown_ids() {
        let store = store_with_examples();
        store.delete_student("S1002");
        store.delete_student("S1002");
        assert!(store.find_by_id("S1002").is_none());
        assert_eq!(store.list_students().len(), 3);
    }

    #[test]
    fn reset_voted_touches_only_voted_students() {
        let store = store_with_examples();
        assert_eq!(store.reset_voted(), 1);
        assert_eq!(
            store.find_by_id("S1003").unwrap().status,
            StudentStatus::Eligible
        );
        // Ineligible students stay barred.
        assert_eq!(
            store.find_by_id("S1004").unwrap().status,
            StudentStatus::Ineligible
        );
        assert_eq!(store.eligible_count(), 3);
    }

    #[test]
    fn replace_all_swaps_the_whole_roster() {
        let store = store_with_examples();
        store
            .replace_all(vec![Student::example_alice(), Student::example_brian()])
            .unwrap();
        assert_eq!(store.list_students().len(), 2);
        assert!(store.find_by_id("S1003").is_none());
    }

    #[test]
    fn replace_all_rejects_the_batch_and_names_the_record() {
        let store = store_with_examples();
        let batch = vec![
            Student::example_alice(),
            Student {
                id: "S2002".to_string(),
                name: "  ".to_string(),
                status: StudentStatus::Eligible,
            },
            Student::example_brian(),
        ];
        let err = store.replace_all(batch).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: record 2 of 3: name is empty for ID 'S2002'"
        );
        // Nothing was applied.
        assert_eq!(store.list_students().len(), 4);
    }

    #[test]
    fn replace_all_rejects_duplicate_ids_within_the_batch() {
        let store = store_with_examples();
        let batch = vec![
            Student::example_alice(),
            Student::example_brian(),
            Student {
                id: "S1001".to_string(),
                name: "Second Alice".to_string(),
                status: StudentStatus::Eligible,
            },
        ];
        let err = store.replace_all(batch).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: record 3 of 3: duplicate student ID 'S1001'"
        );
    }
}
