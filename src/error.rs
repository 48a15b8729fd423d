use thiserror::Error;

use crate::validation::ValidationResult;

/// Errors that can occur while loading, searching or submitting recipes
#[derive(Error, Debug)]
pub enum HubError {
    /// Failed to read a recipe data file
    #[error("Failed to read recipe data: {0}")]
    Io(#[from] std::io::Error),

    /// Recipe data is not valid JSON for the record shape
    #[error("Failed to parse recipe data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A pattern rule was declared with an invalid regular expression
    #[error("Invalid pattern rule: {0}")]
    Pattern(#[from] regex::Error),

    /// No recipe with the requested id
    #[error("Recipe not found: {0}")]
    NotFound(u32),

    /// Submission failed validation; holds the per-field messages
    #[error("Submission rejected: {0}")]
    Rejected(ValidationResult),

    /// Input that cannot be accepted for a reason other than form rules
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
