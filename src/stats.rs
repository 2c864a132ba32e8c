use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{fresh_id, ArchivedElection, CandidateId, Category, CategoryId};
use crate::store::{CategoryBreakdown, Turnout};
use crate::App;

/// Everything the statistics screen shows, in one shape.
///
/// Both the running election and an archived one produce this, so the screen
/// renders either without knowing which it is looking at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedStatistic {
    pub election_name: String,
    pub total_students_voted: u64,
    pub total_eligible_students: u64,
    /// Rounded to one decimal place.
    pub turnout_percentage: f64,
    pub vote_counts: HashMap<CandidateId, u64>,
    pub skip_counts_by_category: HashMap<CategoryId, u64>,
    pub categories_to_display: Vec<Category>,
}

impl DisplayedStatistic {
    /// Results for one displayed category, by ID.
    pub fn category_breakdown(&self, category_id: &str) -> Option<CategoryBreakdown> {
        let category = self
            .categories_to_display
            .iter()
            .find(|c| c.id == category_id)?;
        Some(CategoryBreakdown::compute(
            category,
            &self.vote_counts,
            &self.skip_counts_by_category,
        ))
    }

    /// Freeze these statistics into an archive closed at `end_date`.
    pub fn into_archive(self, end_date: DateTime<Utc>) -> ArchivedElection {
        ArchivedElection {
            id: format!("arch_{}", fresh_id()),
            name: self.election_name,
            end_date,
            total_students_voted: self.total_students_voted,
            total_eligible_students: self.total_eligible_students,
            turnout_percentage: self.turnout_percentage,
            vote_counts: self.vote_counts,
            skip_counts_by_category: self.skip_counts_by_category,
            election_setup: self.categories_to_display,
        }
    }
}

/// Anything statistics can be read from.
pub trait StatisticsSource {
    fn displayed(&self) -> DisplayedStatistic;
}

/// Statistics over the running election.
pub struct LiveStatistics<'a> {
    app: &'a App,
}

impl<'a> LiveStatistics<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl StatisticsSource for LiveStatistics<'_> {
    fn displayed(&self) -> DisplayedStatistic {
        // One tally snapshot feeds every figure, so the voted total always
        // agrees with the counts beside it.
        let counts = self.app.tally.counts();
        let eligible = self.app.roster.eligible_count();
        let turnout = Turnout::of(counts.total_voted, eligible);
        DisplayedStatistic {
            election_name: self.app.settings.election_name(),
            total_students_voted: counts.total_voted,
            total_eligible_students: eligible,
            turnout_percentage: turnout.percent,
            vote_counts: counts.vote_counts,
            skip_counts_by_category: counts.skip_counts,
            categories_to_display: self.app.config.list_categories(),
        }
    }
}

impl StatisticsSource for ArchivedElection {
    fn displayed(&self) -> DisplayedStatistic {
        DisplayedStatistic {
            election_name: self.name.clone(),
            total_students_voted: self.total_students_voted,
            total_eligible_students: self.total_eligible_students,
            turnout_percentage: self.turnout_percentage,
            vote_counts: self.vote_counts.clone(),
            skip_counts_by_category: self.skip_counts_by_category.clone(),
            categories_to_display: self.election_setup.clone(),
        }
    }
}
