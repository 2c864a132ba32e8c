use log::debug;

use crate::error::{Error, Result};
use crate::model::{Category, Selection, StudentId, VoteSelections};
use crate::store::TallyEngine;

/// Where a voter is within their ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallotStage {
    /// On the category screen at this index.
    Viewing(usize),
    /// Reviewing the completed selections before submission.
    Confirming,
    /// Submission in progress; visible only while `submit` runs.
    Submitting,
    /// The ballot has been counted. No further input is accepted.
    Done,
}

/// One voter's walk through the ballot.
///
/// The controller snapshots the categories and the skip policy when the
/// ballot begins, so a configuration change mid-vote cannot desynchronise
/// an open ballot; the next voter picks up the new configuration.
///
/// Movement is strictly sequential. `next` refuses to leave a category
/// without a decision: the voter either picked a candidate, skipped where
/// the policy (or an empty category) allows it, or stays put. By the time
/// the confirmation screen is reached every category has an entry, apart
/// from skippable ones the voter never revisited, which `submit` fills in
/// as skipped.
///
/// After a successful `submit` the controller is spent; the caller is
/// expected to drop it and clear the voter's identity from the UI session.
#[derive(Debug)]
pub struct BallotController {
    voter_id: StudentId,
    categories: Vec<Category>,
    allow_skip: bool,
    selections: VoteSelections,
    stage: BallotStage,
}

impl BallotController {
    /// Start a ballot for a verified voter over the given categories.
    pub fn begin(
        voter_id: impl Into<StudentId>,
        categories: Vec<Category>,
        allow_skip: bool,
    ) -> Result<Self> {
        let voter_id = voter_id.into();
        if categories.is_empty() {
            return Err(Error::NoCategories);
        }
        debug!(
            "ballot started for '{}' across {} categories",
            voter_id,
            categories.len()
        );
        Ok(Self {
            voter_id,
            categories,
            allow_skip,
            selections: VoteSelections::new(),
            stage: BallotStage::Viewing(0),
        })
    }

    pub fn stage(&self) -> BallotStage {
        self.stage
    }

    pub fn voter_id(&self) -> &str {
        &self.voter_id
    }

    /// The categories of this ballot, as snapshotted at `begin`.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The decisions made so far, for the confirmation screen.
    pub fn selections(&self) -> &VoteSelections {
        &self.selections
    }

    /// The category on screen, when one is.
    pub fn current_category(&self) -> Option<&Category> {
        match self.stage {
            BallotStage::Viewing(index) => self.categories.get(index),
            _ => None,
        }
    }

    /// Completion fraction for the progress bar: category position over
    /// category count while viewing, full once confirmation is reached.
    pub fn progress(&self) -> f64 {
        match self.stage {
            BallotStage::Viewing(index) => (index + 1) as f64 / self.categories.len() as f64,
            _ => 1.0,
        }
    }

    fn require_viewing(&self, refusal: &str) -> Result<usize> {
        match self.stage {
            BallotStage::Viewing(index) => Ok(index),
            _ => Err(Error::Precondition(refusal.to_string())),
        }
    }

    /// Whether the category may be left without choosing a candidate.
    /// A category with nobody standing can only be skipped.
    fn may_skip(&self, category: &Category) -> bool {
        self.allow_skip || category.candidates.is_empty()
    }

    /// Choose a candidate in the current category. Choosing again replaces
    /// the earlier choice.
    pub fn select(&mut self, candidate_id: &str) -> Result<()> {
        let index = self.require_viewing("Cannot select a candidate outside a category screen.")?;
        let category = &self.categories[index];
        if category.candidate(candidate_id).is_none() {
            return Err(Error::not_found(format!(
                "Candidate with ID '{}' in category '{}'",
                candidate_id, category.name
            )));
        }
        let category_id = category.id.clone();
        self.selections
            .insert(category_id, Selection::Candidate(candidate_id.to_string()));
        Ok(())
    }

    /// Explicitly decline to vote in the current category.
    pub fn skip(&mut self) -> Result<()> {
        let index = self.require_viewing("Cannot skip outside a category screen.")?;
        let category = &self.categories[index];
        if !self.may_skip(category) {
            return Err(Error::Precondition(
                "Skipping is not allowed in this election.".to_string(),
            ));
        }
        let category_id = category.id.clone();
        self.selections.insert(category_id, Selection::Skipped);
        Ok(())
    }

    /// Leave the current category for the next one, or for confirmation
    /// after the last. Refuses to leave a category that has no decision
    /// and cannot be skipped.
    pub fn next(&mut self) -> Result<()> {
        let index = self.require_viewing("Cannot advance outside a category screen.")?;
        let category = &self.categories[index];
        let category_id = category.id.clone();
        let category_name = category.name.clone();
        let may_skip = self.may_skip(category);
        if !self.selections.contains_key(&category_id) {
            if !may_skip {
                return Err(Error::SelectionRequired(format!(
                    "Please select a candidate for {}.",
                    category_name
                )));
            }
            self.selections.insert(category_id, Selection::Skipped);
        }
        self.stage = if index + 1 == self.categories.len() {
            BallotStage::Confirming
        } else {
            BallotStage::Viewing(index + 1)
        };
        Ok(())
    }

    /// Step back one category, or from confirmation to the last category.
    /// On the first category, and after submission, this does nothing.
    pub fn previous(&mut self) {
        match self.stage {
            BallotStage::Viewing(index) if index > 0 => {
                self.stage = BallotStage::Viewing(index - 1);
            }
            BallotStage::Confirming => {
                self.stage = BallotStage::Viewing(self.categories.len() - 1);
            }
            _ => {}
        }
    }

    /// Submit the confirmed ballot to the tally.
    ///
    /// Any category still without an entry is recorded as skipped; only
    /// skippable categories can be in that position. If the engine refuses
    /// the ballot the controller returns to confirmation and the error is
    /// passed up.
    pub fn submit(&mut self, tally: &TallyEngine) -> Result<()> {
        if self.stage != BallotStage::Confirming {
            return Err(Error::Precondition(
                "The ballot is not at the confirmation step.".to_string(),
            ));
        }
        self.stage = BallotStage::Submitting;
        for category in &self.categories {
            if !self.selections.contains_key(&category.id) {
                self.selections
                    .insert(category.id.clone(), Selection::Skipped);
            }
        }
        if let Err(err) = tally.record_ballot(&self.voter_id, &self.selections) {
            self.stage = BallotStage::Confirming;
            return Err(err);
        }
        self.stage = BallotStage::Done;
        Ok(())
    }
}
