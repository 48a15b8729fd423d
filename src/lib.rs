pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod todo;
pub mod users;
pub mod validation;

pub use catalog::Catalog;
pub use config::{FormLimits, HubConfig};
pub use error::HubError;
pub use model::{Recipe, RecipeDraft};
pub use search::{filter, SearchState};
pub use todo::{Todo, TodoList};
pub use users::{SearchPlan, UserQuery};
pub use validation::{validate, FormSchema, FormValues, Rule, RuleKind, ValidationResult};

/// Search the bundled recipes by title or summary.
///
/// # Example
/// ```
/// let hits = recipe_hub::search_recipes("salad").unwrap();
/// assert!(hits.iter().all(|r| r.title.to_lowercase().contains("salad")
///     || r.summary.to_lowercase().contains("salad")));
/// ```
pub fn search_recipes(term: &str) -> Result<Vec<Recipe>, HubError> {
    let catalog = Catalog::bundled()?;
    Ok(search::filter_owned(catalog.all(), term))
}

/// Check an "add recipe" submission with the default limits.
pub fn validate_recipe(draft: &RecipeDraft) -> Result<ValidationResult, HubError> {
    validate_recipe_with_limits(draft, &FormLimits::default())
}

pub fn validate_recipe_with_limits(
    draft: &RecipeDraft,
    limits: &FormLimits,
) -> Result<ValidationResult, HubError> {
    let schema = validation::schemas::recipe_form(limits)?;
    Ok(validate(&schema, &draft.to_values()))
}

/// Check a sign-up submission (`username`, `email`, `password`).
pub fn validate_registration(
    values: &FormValues,
    limits: &FormLimits,
) -> Result<ValidationResult, HubError> {
    let schema = validation::schemas::registration_form(limits)?;
    Ok(validate(&schema, values))
}
