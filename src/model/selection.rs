use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{CandidateId, CategoryId};

/// A voter's decision for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// The chosen candidate.
    Candidate(CandidateId),
    /// An explicit non-vote for the category.
    Skipped,
}

/// One completed ballot: a decision per category, at most one entry each.
pub type VoteSelections = HashMap<CategoryId, Selection>;
