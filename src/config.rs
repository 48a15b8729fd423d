use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct HubConfig {
    /// Recipe data file to use instead of the bundled recipes
    #[serde(default)]
    pub recipes_path: Option<PathBuf>,
    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Thresholds used by the built-in forms
    #[serde(default)]
    pub form: FormLimits,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            recipes_path: None,
            log_level: default_log_level(),
            form: FormLimits::default(),
        }
    }
}

/// Length and count thresholds for the built-in forms
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FormLimits {
    /// Minimum recipe title length in characters
    #[serde(default = "default_title_min_len")]
    pub title_min_len: usize,
    /// Minimum recipe summary length in characters
    #[serde(default = "default_summary_min_len")]
    pub summary_min_len: usize,
    /// Minimum number of non-blank ingredient lines
    #[serde(default = "default_min_lines")]
    pub min_ingredients: usize,
    /// Minimum number of non-blank instruction lines
    #[serde(default = "default_min_lines")]
    pub min_instructions: usize,
    /// Minimum password length in characters
    #[serde(default = "default_password_min_len")]
    pub password_min_len: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            title_min_len: default_title_min_len(),
            summary_min_len: default_summary_min_len(),
            min_ingredients: default_min_lines(),
            min_instructions: default_min_lines(),
            password_min_len: default_password_min_len(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_title_min_len() -> usize {
    3
}

fn default_summary_min_len() -> usize {
    10
}

fn default_min_lines() -> usize {
    2
}

fn default_password_min_len() -> usize {
    6
}

impl HubConfig {
    /// Load configuration from `recipe-hub.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_HUB__ prefix
    /// 2. recipe-hub.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_HUB__FORM__TITLE_MIN_LEN
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Same as [`HubConfig::load`] but reads the given file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        load_config(Some(path))
    }
}

fn load_config(path: Option<&Path>) -> Result<HubConfig, ConfigError> {
    let file = match path {
        Some(p) => File::from(p).required(true),
        // Optional config file (can be missing)
        None => File::with_name("recipe-hub").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_HUB__FORM__TITLE_MIN_LEN
        .add_source(
            Environment::with_prefix("RECIPE_HUB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
