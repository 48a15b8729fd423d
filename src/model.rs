use serde::{Deserialize, Serialize};

use crate::validation::FormValues;

/// A single recipe as shown in the browse grid and the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    /// Short blurb; older data files call this `description`
    #[serde(alias = "description", default)]
    pub summary: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Case-insensitive substring test against title or summary.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.summary.to_lowercase().contains(needle)
    }
}

/// Raw text of the "add recipe" form, one line per ingredient/step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub summary: String,
    pub image: String,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeDraft {
    pub fn from_values(values: &FormValues) -> Self {
        let field = |name: &str| values.get(name).unwrap_or_default().to_string();
        Self {
            title: field("title"),
            summary: field("summary"),
            image: field("image"),
            ingredients: field("ingredients"),
            instructions: field("instructions"),
        }
    }

    pub fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("title", &self.title)
            .with("summary", &self.summary)
            .with("image", &self.image)
            .with("ingredients", &self.ingredients)
            .with("instructions", &self.instructions)
    }

    /// Turn the draft into a record. Does not validate.
    pub fn into_recipe(self, id: u32) -> Recipe {
        Recipe {
            id,
            title: self.title.trim().to_string(),
            summary: self.summary.trim().to_string(),
            image: self.image.trim().to_string(),
            ingredients: non_blank_lines(&self.ingredients)
                .map(str::to_string)
                .collect(),
            instructions: non_blank_lines(&self.instructions)
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Trimmed, non-blank lines of a newline-delimited text area.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}
