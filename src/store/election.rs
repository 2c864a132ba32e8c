use log::debug;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::model::{fresh_id, Candidate, Category};

/// Owner of the election configuration: the categories and their candidates.
///
/// Category insertion order is preserved; it is the order ballots traverse
/// and statistics display. All access goes through this store, so every
/// snapshot handed out is internally consistent.
#[derive(Debug, Default)]
pub struct ElectionConfigStore {
    categories: Mutex<Vec<Category>>,
}

impl ElectionConfigStore {
    pub fn new(initial: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(initial),
        }
    }

    /// All categories with their candidates, in configured order.
    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.lock().clone()
    }

    pub fn find_category(&self, category_id: &str) -> Option<Category> {
        self.categories
            .lock()
            .iter()
            .find(|c| c.id == category_id)
            .cloned()
    }

    /// How many candidates a category has, without cloning it.
    pub fn candidate_count(&self, category_id: &str) -> Option<usize> {
        self.categories
            .lock()
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.candidates.len())
    }

    /// Create a category with no candidates and a fresh ID.
    pub fn add_category(&self, name: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Category name cannot be empty."));
        }
        let category = Category {
            id: fresh_id(),
            name: name.to_string(),
            candidates: Vec::new(),
        };
        self.categories.lock().push(category.clone());
        debug!("added category '{}' ({})", category.name, category.id);
        Ok(category)
    }

    pub fn rename_category(&self, category_id: &str, new_name: &str) -> Result<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(Error::validation("Category name cannot be empty."));
        }
        let mut categories = self.categories.lock();
        let category = categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| Error::not_found(format!("Category with ID '{}'", category_id)))?;
        debug!("renaming category '{}' to '{}'", category.name, new_name);
        category.name = new_name.to_string();
        Ok(())
    }

    /// Delete a category. Only a category with no candidates can go;
    /// one that still has candidates must be emptied first.
    pub fn delete_category(&self, category_id: &str) -> Result<()> {
        let mut categories = self.categories.lock();
        let index = categories
            .iter()
            .position(|c| c.id == category_id)
            .ok_or_else(|| Error::not_found(format!("Category with ID '{}'", category_id)))?;
        if !categories[index].candidates.is_empty() {
            return Err(Error::Precondition(format!(
                "Category '{}' still has {} candidate(s); remove them first.",
                categories[index].name,
                categories[index].candidates.len()
            )));
        }
        let removed = categories.remove(index);
        debug!("deleted category '{}' ({})", removed.name, removed.id);
        Ok(())
    }

    /// Add a candidate with a fresh ID to the given category.
    pub fn add_candidate(
        &self,
        category_id: &str,
        name: &str,
        photo_ref: Option<String>,
        photo_hint: Option<String>,
    ) -> Result<Candidate> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Candidate name cannot be empty."));
        }
        let mut categories = self.categories.lock();
        let category = categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| Error::not_found(format!("Category with ID '{}'", category_id)))?;
        let candidate = Candidate {
            id: fresh_id(),
            name: name.to_string(),
            photo_ref,
            photo_hint,
        };
        category.candidates.push(candidate.clone());
        debug!(
            "added candidate '{}' ({}) to category '{}'",
            candidate.name, candidate.id, category.name
        );
        Ok(candidate)
    }

    /// Replace the stored candidate matching `candidate.id` within a category.
    pub fn update_candidate(&self, category_id: &str, candidate: Candidate) -> Result<()> {
        if candidate.name.trim().is_empty() {
            return Err(Error::validation("Candidate name cannot be empty."));
        }
        let mut categories = self.categories.lock();
        let category = categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| Error::not_found(format!("Category with ID '{}'", category_id)))?;
        let stored = category
            .candidates
            .iter_mut()
            .find(|c| c.id == candidate.id)
            .ok_or_else(|| Error::not_found(format!("Candidate with ID '{}'", candidate.id)))?;
        debug!("updating candidate '{}' ({})", candidate.name, candidate.id);
        *stored = candidate;
        Ok(())
    }

    /// Move a candidate to another category, keeping its ID and votes.
    pub fn move_candidate(
        &self,
        from_category_id: &str,
        to_category_id: &str,
        candidate_id: &str,
    ) -> Result<()> {
        let mut categories = self.categories.lock();
        let from = categories
            .iter()
            .position(|c| c.id == from_category_id)
            .ok_or_else(|| Error::not_found(format!("Category with ID '{}'", from_category_id)))?;
        let to = categories
            .iter()
            .position(|c| c.id == to_category_id)
            .ok_or_else(|| Error::not_found(format!("Category with ID '{}'", to_category_id)))?;
        let index = categories[from]
            .candidates
            .iter()
            .position(|c| c.id == candidate_id)
            .ok_or_else(|| Error::not_found(format!("Candidate with ID '{}'", candidate_id)))?;
        if from == to {
            return Ok(());
        }
        let candidate = categories[from].candidates.remove(index);
        debug!(
            "moving candidate '{}' from '{}' to '{}'",
            candidate.name, from_category_id, to_category_id
        );
        categories[to].candidates.push(candidate);
        Ok(())
    }

    /// Remove a candidate from a category. The caller is responsible for
    /// clearing any tally counts recorded against the candidate.
    pub fn delete_candidate(&self, category_id: &str, candidate_id: &str) -> Result<()> {
        let mut categories = self.categories.lock();
        let category = categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| Error::not_found(format!("Category with ID '{}'", category_id)))?;
        let index = category
            .candidates
            .iter()
            .position(|c| c.id == candidate_id)
            .ok_or_else(|| Error::not_found(format!("Candidate with ID '{}'", candidate_id)))?;
        let removed = category.candidates.remove(index);
        debug!(
            "deleted candidate '{}' ({}) from category '{}'",
            removed.name, removed.id, category.name
        );
        Ok(())
    }
}
