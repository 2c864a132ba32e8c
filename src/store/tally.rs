use std::collections::{HashMap, HashSet};

use log::{debug, info};
use parking_lot::RwLock;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{CandidateId, Category, CategoryId, Selection, StudentId, VoteSelections};

/// Round to one decimal place, the precision used for all displayed percentages.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Live vote counters for the current election cycle.
///
/// Voter sessions submit concurrently while admins read or reset, so the
/// whole state sits behind one reader-writer lock. `record_ballot` applies a
/// ballot under the write half: readers never observe a half-counted ballot,
/// and `reset` cannot interleave with a submission.
///
/// Counts are keyed by raw IDs. The engine does not check that a candidate ID
/// belongs to the category it was recorded under; the ballot controller is
/// the layer that constrains what gets submitted.
#[derive(Debug, Default)]
pub struct TallyEngine {
    state: RwLock<TallyState>,
}

#[derive(Debug, Default)]
struct TallyState {
    vote_counts: HashMap<CandidateId, u64>,
    skip_counts: HashMap<CategoryId, u64>,
    voted: HashSet<StudentId>,
}

/// A point-in-time copy of the tally, for statistics and archiving.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TallyCounts {
    pub vote_counts: HashMap<CandidateId, u64>,
    pub skip_counts: HashMap<CategoryId, u64>,
    pub total_voted: u64,
}

/// Turnout figures derived from the voted set and the eligible count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Turnout {
    pub voted: u64,
    pub eligible: u64,
    /// `voted / eligible` as a percentage, rounded to one decimal place.
    /// Zero when nobody is eligible.
    pub percent: f64,
}

impl Turnout {
    pub fn of(voted: u64, eligible: u64) -> Self {
        let percent = if eligible > 0 {
            round1(voted as f64 / eligible as f64 * 100.0)
        } else {
            0.0
        };
        Self {
            voted,
            eligible,
            percent,
        }
    }
}

/// Results for one category: its candidates' counts plus the skip count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// One entry per candidate of the category, zero when unvoted.
    pub candidate_counts: HashMap<CandidateId, u64>,
    /// Explicit skips recorded against the category.
    pub skipped: u64,
    /// Sum of the candidate counts. Skips are not votes and stay out.
    pub total_candidate_votes: u64,
}

impl CategoryBreakdown {
    /// Derive a category's results from raw count maps. Shared by the live
    /// engine and archived statistics so both report identical figures.
    pub(crate) fn compute(
        category: &Category,
        vote_counts: &HashMap<CandidateId, u64>,
        skip_counts: &HashMap<CategoryId, u64>,
    ) -> Self {
        let candidate_counts: HashMap<CandidateId, u64> = category
            .candidates
            .iter()
            .map(|c| (c.id.clone(), vote_counts.get(&c.id).copied().unwrap_or(0)))
            .collect();
        let total_candidate_votes = candidate_counts.values().sum();
        Self {
            candidate_counts,
            skipped: skip_counts.get(&category.id).copied().unwrap_or(0),
            total_candidate_votes,
        }
    }

    /// A candidate's share of the category's candidate votes, rounded to one
    /// decimal place. Zero when the category has no candidate votes at all.
    pub fn percentage(&self, candidate_id: &str) -> f64 {
        if self.total_candidate_votes == 0 {
            return 0.0;
        }
        let count = self.candidate_counts.get(candidate_id).copied().unwrap_or(0);
        round1(count as f64 / self.total_candidate_votes as f64 * 100.0)
    }
}

impl TallyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed ballot.
    ///
    /// The voter check and every increment happen under a single write lock:
    /// either the whole ballot counts or none of it does. A voter already in
    /// the voted set is rejected before anything is incremented.
    pub fn record_ballot(&self, voter_id: &str, selections: &VoteSelections) -> Result<()> {
        let mut state = self.state.write();
        if state.voted.contains(voter_id) {
            return Err(Error::Conflict(format!(
                "Student '{}' has already submitted a ballot.",
                voter_id
            )));
        }
        for (category_id, selection) in selections {
            match selection {
                Selection::Candidate(candidate_id) => {
                    *state.vote_counts.entry(candidate_id.clone()).or_insert(0) += 1;
                }
                Selection::Skipped => {
                    *state.skip_counts.entry(category_id.clone()).or_insert(0) += 1;
                }
            }
        }
        state.voted.insert(voter_id.to_string());
        // The choices themselves are never logged, only their count.
        info!(
            "recorded ballot from '{}' covering {} categories",
            voter_id,
            selections.len()
        );
        Ok(())
    }

    /// Wipe all counts and the voted set, ready for a new cycle.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.vote_counts.clear();
        state.skip_counts.clear();
        state.voted.clear();
        info!("tally reset");
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.state.read().voted.contains(voter_id)
    }

    pub fn voted_count(&self) -> u64 {
        self.state.read().voted.len() as u64
    }

    /// Turnout against the given eligible count.
    pub fn turnout(&self, eligible: u64) -> Turnout {
        Turnout::of(self.voted_count(), eligible)
    }

    /// Results for one category as currently counted.
    pub fn category_breakdown(&self, category: &Category) -> CategoryBreakdown {
        let state = self.state.read();
        CategoryBreakdown::compute(category, &state.vote_counts, &state.skip_counts)
    }

    /// A consistent copy of all counts, taken under one read lock.
    pub fn counts(&self) -> TallyCounts {
        let state = self.state.read();
        TallyCounts {
            vote_counts: state.vote_counts.clone(),
            skip_counts: state.skip_counts.clone(),
            total_voted: state.voted.len() as u64,
        }
    }

    /// Drop a removed candidate's count. Their recorded votes leave the tally
    /// with them rather than lingering against a dangling ID.
    pub fn on_candidate_removed(&self, candidate_id: &str) {
        if self.state.write().vote_counts.remove(candidate_id).is_some() {
            debug!("dropped tally entry for removed candidate '{}'", candidate_id);
        }
    }

    /// Drop a removed category's skip count.
    pub fn on_category_removed(&self, category_id: &str) {
        if self.state.write().skip_counts.remove(category_id).is_some() {
            debug!("dropped skip entry for removed category '{}'", category_id);
        }
    }
}
