mod archive;
mod category;
mod selection;
mod session;
mod student;

pub use archive::ArchivedElection;
pub use category::{Candidate, Category};
pub use selection::{Selection, VoteSelections};
pub use session::{SessionStatus, VotingSession};
pub use student::{Student, StudentStatus};

/// Category ids are human-readable strings (e.g. "president").
pub type CategoryId = String;
/// Candidate ids are short strings unique within the whole configuration.
pub type CandidateId = String;
/// Student ids are human-assigned strings (e.g. "S1001"), immutable once created.
pub type StudentId = String;
/// Session ids are generated strings with a `sess_` prefix.
pub type SessionId = String;

/// Generate a fresh random id: nine lowercase alphanumeric characters.
pub fn fresh_id() -> String {
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}
