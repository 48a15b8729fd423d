//! Field-level form validation.
//!
//! A [`FormSchema`] declares, per field, an ordered list of typed [`Rule`]s.
//! [`validate`] runs every field and records the message of the first rule
//! that fails for that field. An empty [`ValidationResult`] means the
//! submission is acceptable.

mod rule;
mod schema;
pub mod schemas;

pub use rule::{Rule, RuleKind};
pub use schema::{FieldRules, FormSchema, FormSchemaBuilder};

use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;

use crate::HubError;

/// Submitted text for each named input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable form of [`FormValues::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Field name to error message, only for failing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult(BTreeMap<String, String>);

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Drop the error for one field, e.g. once the user edits it again.
    pub fn clear(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    /// `Ok(())` when empty, otherwise [`HubError::Rejected`] carrying the messages.
    pub fn into_result(self) -> Result<(), HubError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(HubError::Rejected(self))
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Run every field of `schema` against `values`.
///
/// A field declared in the schema but missing from `values` is validated as
/// an empty string, so it reports its "required" message.
pub fn validate(schema: &FormSchema, values: &FormValues) -> ValidationResult {
    let mut errors = BTreeMap::new();

    for field in schema.fields() {
        let value = match values.get(&field.name) {
            Some(v) => v,
            None => {
                warn!(
                    "Field '{}' has rules but no submitted value; treating it as empty",
                    field.name
                );
                ""
            }
        };

        if let Some(message) = field.first_failure(value) {
            errors.insert(field.name.clone(), message.to_string());
        }
    }

    debug!(
        "Validated {} field(s), {} failing",
        schema.fields().len(),
        errors.len()
    );
    ValidationResult(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_schema() -> FormSchema {
        FormSchema::builder()
            .field("username")
            .required("Username is required")
            .min_len(3, "Too short")
            .field("password")
            .required("Password is required")
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_submission_is_empty() {
        let values = FormValues::new()
            .with("username", "chef")
            .with("password", "secret");
        let result = validate(&login_schema(), &values);

        assert!(result.is_empty());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_one_message_per_field() {
        let values = FormValues::new()
            .with("username", "  ")
            .with("password", "");
        let result = validate(&login_schema(), &values);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("username"), Some("Username is required"));
        assert_eq!(result.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_missing_value_treated_as_empty() {
        let values = FormValues::new().with("username", "chef");
        let result = validate(&login_schema(), &values);

        assert_eq!(result.get("password"), Some("Password is required"));
        assert!(!result.has_error("username"));
    }

    #[test]
    fn test_extra_values_are_ignored() {
        let values = FormValues::new()
            .with("username", "chef")
            .with("password", "secret")
            .with("nickname", "");
        assert!(validate(&login_schema(), &values).is_empty());
    }

    #[test]
    fn test_clear_and_display() {
        let values = FormValues::new().with("username", "ab");
        let mut result = validate(&login_schema(), &values);

        assert_eq!(
            result.to_string(),
            "password: Password is required; username: Too short"
        );
        assert_eq!(result.clear("username").as_deref(), Some("Too short"));
        assert!(matches!(result.into_result(), Err(HubError::Rejected(r)) if r.len() == 1));
    }

    #[test]
    fn test_values_from_iterator() {
        let values: FormValues = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(values.get("b"), Some("2"));
        assert_eq!(values.iter().count(), 2);
    }
}
