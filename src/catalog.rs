use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::FormLimits;
use crate::model::{Recipe, RecipeDraft};
use crate::search;
use crate::validation::{schemas, validate, FormValues};
use crate::HubError;

const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// In-memory recipe collection backing the browse, detail and add pages.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Recipes shipped with the crate
    pub fn bundled() -> Result<Self, HubError> {
        Self::from_json(BUNDLED_RECIPES)
    }

    /// Parse a JSON array of recipes. Ids must be unique.
    pub fn from_json(json: &str) -> Result<Self, HubError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::from_recipes(recipes)
    }

    pub fn from_path(path: &Path) -> Result<Self, HubError> {
        debug!("Loading recipes from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, HubError> {
        let mut seen = HashSet::new();
        if let Some(dup) = recipes.iter().find(|r| !seen.insert(r.id)) {
            return Err(HubError::InvalidInput(format!(
                "Duplicate recipe id {}",
                dup.id
            )));
        }
        debug!("Catalog holds {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Like [`Catalog::get`] but reports a missing id as [`HubError::NotFound`]
    pub fn find(&self, id: u32) -> Result<&Recipe, HubError> {
        self.get(id).ok_or(HubError::NotFound(id))
    }

    pub fn search(&self, term: &str) -> Vec<&Recipe> {
        search::filter(&self.recipes, term)
    }

    /// Validate the "add recipe" form and append the recipe on success.
    ///
    /// # Errors
    /// [`HubError::Rejected`] with the per-field messages when any rule fails,
    /// [`HubError::InvalidInput`] when no id is left above the current maximum.
    pub fn submit(&mut self, values: &FormValues, limits: &FormLimits) -> Result<&Recipe, HubError> {
        let schema = schemas::recipe_form(limits)?;
        validate(&schema, values).into_result()?;

        let id = self.next_id()?;
        let recipe = RecipeDraft::from_values(values).into_recipe(id);
        info!("Added recipe {} '{}'", recipe.id, recipe.title);
        self.recipes.push(recipe);
        self.recipes
            .last()
            .ok_or_else(|| HubError::InvalidInput("Recipe was not stored".to_string()))
    }

    fn next_id(&self) -> Result<u32, HubError> {
        match self.recipes.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                HubError::InvalidInput(format!("No recipe id available after {}", max))
            }),
        }
    }
}
