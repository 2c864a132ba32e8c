//! Seed data loading.
//!
//! The stores take plain values and never parse anything themselves; this is
//! where the bundled JSON fixtures (and any data an embedding application
//! ships in the same shape) become those values.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{Category, SessionStatus, Student, VotingSession};
use crate::App;

/// Timestamp format used in the session fixtures.
const SESSION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Categories and candidates, as in `fixtures/voting-data.json`.
pub fn categories_from_json(json: &str) -> Result<Vec<Category>> {
    serde_json::from_str(json)
        .map_err(|err| Error::validation(format!("Malformed category seed JSON: {}", err)))
}

/// Roster records, as in `fixtures/students-data.json`. The three-value
/// status enum is enforced here by deserialisation.
pub fn students_from_json(json: &str) -> Result<Vec<Student>> {
    serde_json::from_str(json)
        .map_err(|err| Error::validation(format!("Malformed student seed JSON: {}", err)))
}

/// Sessions, as in `fixtures/sessions-data.json`. Dates there are local
/// wall-clock stamps like "2024-03-10 09:00" and are read as UTC.
pub fn sessions_from_json(json: &str) -> Result<Vec<VotingSession>> {
    let seeds: Vec<SessionSeed> = serde_json::from_str(json)
        .map_err(|err| Error::validation(format!("Malformed session seed JSON: {}", err)))?;
    seeds
        .into_iter()
        .map(|seed| {
            Ok(VotingSession {
                start_date: parse_stamp(&seed.start_date)?,
                end_date: parse_stamp(&seed.end_date)?,
                id: seed.id,
                name: seed.name,
                status: seed.status,
            })
        })
        .collect()
}

/// An application populated with the bundled sample dataset.
pub fn sample_app() -> Result<App> {
    Ok(App::seeded(
        categories_from_json(include_str!("../fixtures/voting-data.json"))?,
        students_from_json(include_str!("../fixtures/students-data.json"))?,
        sessions_from_json(include_str!("../fixtures/sessions-data.json"))?,
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSeed {
    id: String,
    name: String,
    start_date: String,
    end_date: String,
    status: SessionStatus,
}

fn parse_stamp(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, SESSION_DATE_FORMAT).map_err(|_| {
        Error::validation(format!(
            "Malformed session date '{}': expected YYYY-MM-DD HH:MM",
            raw
        ))
    })?;
    Ok(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentStatus;

    #[test]
    fn bundled_categories_parse() {
        let categories =
            categories_from_json(include_str!("../fixtures/voting-data.json")).unwrap();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].id, "president");
        assert_eq!(categories[0].candidates.len(), 3);
        assert_eq!(categories[0].candidates[0].name, "Alice Wonderland");
        assert!(categories[0].candidates[0].photo_ref.is_some());
    }

    #[test]
    fn bundled_students_parse() {
        let students = students_from_json(include_str!("../fixtures/students-data.json")).unwrap();
        let alice = students.iter().find(|s| s.id == "S1001").unwrap();
        assert_eq!(alice.name, "Alice Johnson");
        assert_eq!(alice.status, StudentStatus::Eligible);
        assert!(students.iter().any(|s| s.status == StudentStatus::Voted));
    }

    #[test]
    fn bundled_sessions_parse_with_wall_clock_stamps() {
        let sessions = sessions_from_json(include_str!("../fixtures/sessions-data.json")).unwrap();
        assert_eq!(sessions[0].id, "session1");
        assert_eq!(sessions[0].status, SessionStatus::Active);
        assert_eq!(
            sessions[0].start_date.to_string(),
            "2024-03-10 09:00:00 UTC"
        );
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = students_from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn malformed_dates_are_reported_with_the_offending_value() {
        let json = r#"[{
            "id": "sess_x", "name": "Broken",
            "startDate": "10/03/2024 9am", "endDate": "2024-03-12 17:00",
            "status": "Pending"
        }]"#;
        let err = sessions_from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Malformed session date '10/03/2024 9am': expected YYYY-MM-DD HH:MM"
        );
    }

    #[test]
    fn the_sample_app_is_ready_to_use() {
        let app = sample_app().unwrap();
        assert_eq!(app.config.list_categories().len(), 3);
        assert!(app.roster.eligible_count() > 0);
        assert!(app.sessions.find_session("session1").is_some());
    }
}
