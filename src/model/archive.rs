use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CandidateId, Category, CategoryId};

/// A frozen record of a finished election cycle.
///
/// Everything needed to display its statistics is copied in at capture time,
/// so an archive stays meaningful after the live configuration, roster and
/// tally have moved on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedElection {
    /// Archive unique ID.
    pub id: String,
    /// Election name at the time of capture.
    pub name: String,
    /// When the cycle was closed.
    pub end_date: DateTime<Utc>,
    /// Number of students who submitted a ballot.
    pub total_students_voted: u64,
    /// Number of eligible students at close.
    pub total_eligible_students: u64,
    /// Turnout percentage, already rounded to one decimal place.
    pub turnout_percentage: f64,
    /// Final per-candidate vote counts.
    pub vote_counts: HashMap<CandidateId, u64>,
    /// Final per-category skip counts.
    pub skip_counts_by_category: HashMap<CategoryId, u64>,
    /// The categories and candidates as configured at close.
    pub election_setup: Vec<Category>,
}
