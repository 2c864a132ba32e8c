//! Admin console operations that touch more than one store.
//!
//! Single-store actions go straight to the store; these wrappers exist for
//! the actions whose effects have to land in a fixed order.

use chrono::Utc;
use log::info;

use crate::error::{Error, Result};
use crate::model::{ArchivedElection, SessionStatus, StudentStatus, VotingSession};
use crate::stats::{LiveStatistics, StatisticsSource};
use crate::App;

/// Create a session scheduled by the settings defaults.
pub fn create_session(app: &App, name: &str) -> Result<VotingSession> {
    let settings = app.settings.get();
    let session = app.sessions.create_session(
        name,
        settings.default_session_start,
        settings.default_session_end,
    )?;
    info!(
        "session '{}' scheduled from {} to {}",
        session.name, session.start_date, session.end_date
    );
    Ok(session)
}

/// Pause the first active session in listing order.
pub fn pause_first_active(app: &App) -> Result<VotingSession> {
    let mut session = app
        .sessions
        .find_first_with_status(SessionStatus::Active)
        .ok_or_else(|| Error::NotFound("No active session to pause.".to_string()))?;
    app.sessions.set_status(&session.id, SessionStatus::Paused)?;
    session.status = SessionStatus::Paused;
    info!("session '{}' paused", session.name);
    Ok(session)
}

/// Close the first session in listing order that is active or paused.
pub fn end_first_active_or_paused(app: &App) -> Result<VotingSession> {
    let mut session = app
        .sessions
        .list_sessions()
        .into_iter()
        .find(|s| matches!(s.status, SessionStatus::Active | SessionStatus::Paused))
        .ok_or_else(|| {
            Error::NotFound("No active or paused session found to end.".to_string())
        })?;
    app.sessions.set_status(&session.id, SessionStatus::Closed)?;
    session.status = SessionStatus::Closed;
    info!("session '{}' ended", session.name);
    Ok(session)
}

/// Remove a candidate and drop their recorded votes.
///
/// Two steps in a fixed order: the candidate leaves the configuration first,
/// and only then does the tally forget them. If removal fails the tally is
/// untouched.
pub fn remove_candidate(app: &App, category_id: &str, candidate_id: &str) -> Result<()> {
    app.config.delete_candidate(category_id, candidate_id)?;
    app.tally.on_candidate_removed(candidate_id);
    info!("candidate '{}' removed along with their votes", candidate_id);
    Ok(())
}

/// Remove an emptied category and drop its recorded skips.
pub fn remove_category(app: &App, category_id: &str) -> Result<()> {
    app.config.delete_category(category_id)?;
    app.tally.on_category_removed(category_id);
    info!("category '{}' removed along with its skips", category_id);
    Ok(())
}

/// Mark a student as having voted this cycle.
///
/// The tally's voted set is what blocks a second ballot; this mirrors that
/// fact onto the roster so admin screens and re-verification see it too.
pub fn mark_voted(app: &App, student_id: &str) -> Result<()> {
    app.roster.set_status(student_id, StudentStatus::Voted)?;
    info!("student '{}' marked as voted", student_id);
    Ok(())
}

/// Close the current election cycle.
///
/// The live statistics are frozen into an archive, the tally starts over
/// empty, and every `Voted` student becomes `Eligible` again. Sessions are
/// left alone; ending those is its own admin action.
pub fn close_cycle(app: &App) -> ArchivedElection {
    let archive = LiveStatistics::new(app)
        .displayed()
        .into_archive(Utc::now());
    app.record_archive(archive.clone());
    app.tally.reset();
    let restored = app.roster.reset_voted();
    info!(
        "cycle closed into archive '{}': {} ballot(s) archived, {} student(s) restored",
        archive.id, archive.total_students_voted, restored
    );
    archive
}
