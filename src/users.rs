//! Decide how a user-directory search should be run.
//!
//! Only the planning is done here: turning what the user typed into either a
//! direct profile lookup or an advanced search query string. Sending the
//! request is left to the caller.

use log::debug;

use crate::validation::{FormSchema, FormValues, ValidationResult};
use crate::HubError;

/// The three inputs of the user search form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub username: String,
    pub location: String,
    pub min_repos: String,
}

/// How to run a [`UserQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// Nothing to search for
    Empty,
    /// Fetch a single profile by login
    Lookup(String),
    /// Run a qualifier-based search with this query string
    Advanced(String),
}

impl UserQuery {
    pub fn new(
        username: impl Into<String>,
        location: impl Into<String>,
        min_repos: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            location: location.into(),
            min_repos: min_repos.into(),
        }
    }

    /// Field errors for the form. Only `min_repos` has a rule.
    pub fn validate(&self) -> Result<ValidationResult, HubError> {
        let schema = FormSchema::builder()
            .field("min_repos")
            .pattern(r"^[0-9]*$", "Minimum repositories must be a whole number")
            .build()?;
        let values = FormValues::new().with("min_repos", self.min_repos.as_str());
        Ok(crate::validation::validate(&schema, &values))
    }

    /// A username alone means a direct lookup; any other criterion means an
    /// advanced search combining everything that was filled in.
    pub fn plan(&self) -> SearchPlan {
        let username = self.username.trim();
        let location = self.location.trim();
        let min_repos = self.min_repos.trim();

        let plan = if username.is_empty() && location.is_empty() && min_repos.is_empty() {
            SearchPlan::Empty
        } else if location.is_empty() && min_repos.is_empty() {
            SearchPlan::Lookup(username.to_string())
        } else {
            let mut parts = Vec::new();
            if !username.is_empty() {
                parts.push(format!("{} in:login", username));
            }
            if !location.is_empty() {
                parts.push(format!("location:{}", location));
            }
            if !min_repos.is_empty() {
                parts.push(format!("repos:>={}", min_repos));
            }
            SearchPlan::Advanced(parts.join(" "))
        };

        debug!("User search plan: {:?}", plan);
        plan
    }
}
