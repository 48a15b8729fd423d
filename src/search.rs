//! Recipe search: keep the records whose title or summary contains the term.

use log::debug;

use crate::model::Recipe;

/// Records whose title or summary contains `term`, ignoring case.
///
/// A blank or whitespace-only term keeps every record. Any other term is
/// matched as typed, surrounding spaces included. Input order is preserved and
/// nothing is mutated, so calling this on every keystroke is fine.
pub fn filter<'a>(records: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    if term.trim().is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    let matched: Vec<&Recipe> = records
        .iter()
        .filter(|recipe| recipe.matches_lowercase(&needle))
        .collect();
    debug!(
        "Search '{}' matched {} of {} recipes",
        needle,
        matched.len(),
        records.len()
    );
    matched
}

/// Same as [`filter`] but returns owned copies.
pub fn filter_owned(records: &[Recipe], term: &str) -> Vec<Recipe> {
    filter(records, term).into_iter().cloned().collect()
}

/// The search box of a recipe list. Owns only the term; the view is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    term: String,
}

impl SearchState {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn clear(&mut self) {
        self.term.clear();
    }

    /// False when the view shows every record
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
    }

    /// Filtered view over `records` for the current term
    pub fn view<'a>(&self, records: &'a [Recipe]) -> Vec<&'a Recipe> {
        filter(records, &self.term)
    }
}
