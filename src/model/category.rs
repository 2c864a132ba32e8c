use serde::{Deserialize, Serialize};

use super::{CandidateId, CategoryId};

/// A position being voted on, e.g. "President".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category unique ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Candidates standing for this position, in display order.
    /// Each candidate belongs to exactly one category.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl Category {
    /// Look up a candidate of this category by ID.
    pub fn candidate(&self, candidate_id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == candidate_id)
    }
}

/// A person standing for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate unique ID.
    pub id: CandidateId,
    /// Display name.
    pub name: String,
    /// Opaque reference to a portrait image, resolved by the embedding UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_ref: Option<String>,
    /// Alt-text hint for the portrait.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_hint: Option<String>,
}
