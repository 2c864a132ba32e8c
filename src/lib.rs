//! In-memory core of the CampusVote campus election app.
//!
//! One [`App`] value holds every store: the election configuration
//! (categories and candidates), the student roster, the voting sessions,
//! the live tally and the admin settings, with ballot controllers,
//! verification and statistics layered on top. Everything lives in process
//! memory; the embedding application owns persistence, identity and UI.

pub mod admin;
pub mod ballot;
pub mod error;
pub mod logging;
pub mod model;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod store;
pub mod verify;

pub use error::{Error, Result};

use parking_lot::Mutex;

use ballot::BallotController;
use model::{ArchivedElection, Category, Student, StudentId, VotingSession};
use settings::SettingsStore;
use stats::{DisplayedStatistic, LiveStatistics, StatisticsSource};
use store::{ElectionConfigStore, RosterStore, SessionStore, TallyEngine};
use verify::VerificationOutcome;

/// The shared state of the election core, one store per concern.
///
/// Create one, wrap it in an `Arc`, and hand clones to the admin and voter
/// layers; the stores synchronise internally.
#[derive(Debug, Default)]
pub struct App {
    /// Categories and candidates.
    pub config: ElectionConfigStore,
    /// The student roster.
    pub roster: RosterStore,
    /// Voting sessions.
    pub sessions: SessionStore,
    /// Live vote counters.
    pub tally: TallyEngine,
    /// Admin-adjustable settings.
    pub settings: SettingsStore,
    archives: Mutex<Vec<ArchivedElection>>,
}

impl App {
    /// An empty application: no categories, no students, no sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// An application populated with initial data.
    pub fn seeded(
        categories: Vec<Category>,
        students: Vec<Student>,
        sessions: Vec<VotingSession>,
    ) -> Self {
        Self {
            config: ElectionConfigStore::new(categories),
            roster: RosterStore::new(students),
            sessions: SessionStore::new(sessions),
            ..Self::default()
        }
    }

    /// Check a voter's entered details against the roster.
    pub fn verify_student(&self, student_id: &str, name: &str) -> VerificationOutcome {
        verify::verify_student(&self.roster, student_id, name)
    }

    /// Start a ballot over the current configuration and skip policy.
    pub fn begin_ballot(&self, voter_id: impl Into<StudentId>) -> Result<BallotController> {
        BallotController::begin(
            voter_id,
            self.config.list_categories(),
            self.settings.allow_skip(),
        )
    }

    /// The statistics screen's view of the running election.
    pub fn statistics(&self) -> DisplayedStatistic {
        LiveStatistics::new(self).displayed()
    }

    /// Archives of closed cycles, oldest first.
    pub fn archives(&self) -> Vec<ArchivedElection> {
        self.archives.lock().clone()
    }

    pub(crate) fn record_archive(&self, archive: ArchivedElection) {
        self.archives.lock().push(archive);
    }
}
