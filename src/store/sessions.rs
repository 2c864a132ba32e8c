use chrono::{Duration, NaiveTime, TimeZone, Utc};
use log::debug;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::model::{fresh_id, SessionStatus, VotingSession};

/// New sessions span from today until this many days later.
const SESSION_LENGTH_DAYS: i64 = 2;

/// Owner of the voting sessions, most recently created first.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<Vec<VotingSession>>,
}

impl SessionStore {
    /// `initial` is kept as given; it is expected newest-first.
    pub fn new(initial: Vec<VotingSession>) -> Self {
        Self {
            sessions: Mutex::new(initial),
        }
    }

    /// All sessions, most recently created first.
    pub fn list_sessions(&self) -> Vec<VotingSession> {
        self.sessions.lock().clone()
    }

    pub fn find_session(&self, session_id: &str) -> Option<VotingSession> {
        self.sessions
            .lock()
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
    }

    /// The first session in listing order with the given status.
    pub fn find_first_with_status(&self, status: SessionStatus) -> Option<VotingSession> {
        self.sessions
            .lock()
            .iter()
            .find(|s| s.status == status)
            .cloned()
    }

    /// Create a `Pending` session running from today at `start` until two
    /// days from now at `end`. The times come from the settings defaults.
    pub fn create_session(
        &self,
        name: &str,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<VotingSession> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Session name cannot be empty."));
        }
        let today = Utc::now().date_naive();
        let session = VotingSession {
            id: format!("sess_{}", fresh_id()),
            name: name.to_string(),
            start_date: Utc.from_utc_datetime(&today.and_time(start)),
            end_date: Utc
                .from_utc_datetime(&(today + Duration::days(SESSION_LENGTH_DAYS)).and_time(end)),
            status: SessionStatus::Pending,
        };
        debug!("created session '{}' ({})", session.name, session.id);
        self.sessions.lock().insert(0, session.clone());
        Ok(session)
    }

    /// Set a session's status. Deliberately unrestricted: any status may
    /// follow any other, so an admin can always back out of a mistake.
    pub fn set_status(&self, session_id: &str, status: SessionStatus) -> Result<()> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| Error::not_found(format!("Session with ID '{}'", session_id)))?;
        debug!("session '{}' is now {}", session.name, status);
        session.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine_to_five() -> (NaiveTime, NaiveTime) {
        (
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        )
    }

    #[test]
    fn created_sessions_follow_the_default_schedule() {
        let store = SessionStore::default();
        let (start, end) = nine_to_five();
        let session = store.create_session("Spring Elections", start, end).unwrap();

        assert!(session.id.starts_with("sess_"));
        assert_eq!(session.status, SessionStatus::Pending);
        assert_eq!(session.start_date.time(), start);
        assert_eq!(session.end_date.time(), end);
        let days = (session.end_date.date_naive() - session.start_date.date_naive()).num_days();
        assert_eq!(days, SESSION_LENGTH_DAYS);
    }

    #[test]
    fn blank_session_name_is_rejected() {
        let store = SessionStore::default();
        let (start, end) = nine_to_five();
        let err = store.create_session("  ", start, end).unwrap_err();
        assert_eq!(
            err,
            Error::Validation("Session name cannot be empty.".to_string())
        );
    }

    #[test]
    fn newest_session_lists_first() {
        let store = SessionStore::default();
        let (start, end) = nine_to_five();
        store.create_session("First", start, end).unwrap();
        store.create_session("Second", start, end).unwrap();
        let names: Vec<String> = store.list_sessions().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn any_status_change_is_allowed() {
        let store = SessionStore::new(vec![VotingSession::example_closed()]);
        // Reopening a closed session is an admin correction, not an error.
        store.set_status("session2", SessionStatus::Active).unwrap();
        assert_eq!(
            store.find_session("session2").unwrap().status,
            SessionStatus::Active
        );
    }

    #[test]
    fn set_status_requires_a_known_session() {
        let store = SessionStore::default();
        assert!(matches!(
            store.set_status("sess_missing", SessionStatus::Paused),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn first_with_status_respects_listing_order() {
        let mut newest = VotingSession::example_active();
        newest.id = "session9".to_string();
        newest.name = "Newest Active".to_string();
        let store = SessionStore::new(vec![
            newest,
            VotingSession::example_active(),
            VotingSession::example_pending(),
        ]);
        let found = store.find_first_with_status(SessionStatus::Active).unwrap();
        assert_eq!(found.id, "session9");
        assert!(store.find_first_with_status(SessionStatus::Paused).is_none());
    }
}
