use super::rule::Rule;
use crate::HubError;

/// The rules bound to one named input, in evaluation order.
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    /// Message of the first failing rule, if any.
    pub fn first_failure(&self, value: &str) -> Option<&str> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// Ordered set of fields and their rules.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldRules>,
}

impl FormSchema {
    /// Creates a new builder for declaring a form
    ///
    /// # Example
    /// ```
    /// use recipe_hub::FormSchema;
    ///
    /// let schema = FormSchema::builder()
    ///     .field("username")
    ///     .required("Username is required")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["username"]);
    /// ```
    pub fn builder() -> FormSchemaBuilder {
        FormSchemaBuilder::default()
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builder for [`FormSchema`]
///
/// Rules attach to the most recently declared field. Declaring a rule before
/// any field, declaring the same field twice, or an invalid pattern all surface
/// from [`FormSchemaBuilder::build`].
#[derive(Debug, Default)]
pub struct FormSchemaBuilder {
    fields: Vec<FieldRules>,
    error: Option<HubError>,
}

impl FormSchemaBuilder {
    /// Start declaring rules for `name`
    pub fn field(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.fields.iter().any(|f| f.name == name) {
            self.fail(HubError::InvalidInput(format!(
                "Field '{}' declared twice",
                name
            )));
        }
        self.fields.push(FieldRules {
            name,
            rules: Vec::new(),
        });
        self
    }

    /// Append an already-built rule to the current field
    pub fn rule(mut self, rule: Rule) -> Self {
        match self.fields.last_mut() {
            Some(field) => field.rules.push(rule),
            None => self.fail(HubError::InvalidInput(
                "Rule declared before any field".to_string(),
            )),
        }
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(Rule::required(message))
    }

    pub fn min_len(self, n: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::min_len(n, message))
    }

    pub fn max_len(self, n: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::max_len(n, message))
    }

    pub fn url(self, message: impl Into<String>) -> Self {
        self.rule(Rule::url(message))
    }

    pub fn min_lines(self, n: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::min_lines(n, message))
    }

    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Self {
        match Rule::pattern(pattern, message) {
            Ok(rule) => self.rule(rule),
            Err(e) => {
                self.fail(e);
                self
            }
        }
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        match Rule::email(message) {
            Ok(rule) => self.rule(rule),
            Err(e) => {
                self.fail(e);
                self
            }
        }
    }

    /// Finish the schema
    ///
    /// # Errors
    /// Returns the first declaration error recorded while building
    pub fn build(self) -> Result<FormSchema, HubError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(FormSchema {
                fields: self.fields,
            }),
        }
    }

    // Keep only the first error; later ones are usually fallout from it.
    fn fail(&mut self, error: HubError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_declaration_order() {
        let schema = FormSchema::builder()
            .field("b")
            .required("b required")
            .field("a")
            .required("a required")
            .min_len(2, "a short")
            .build()
            .unwrap();

        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(schema.field("a").unwrap().rules.len(), 2);
    }

    #[test]
    fn test_rule_before_field_fails() {
        let result = FormSchema::builder().required("orphan").build();
        assert!(matches!(result, Err(HubError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_field_fails() {
        let result = FormSchema::builder().field("x").field("x").build();
        assert!(matches!(result, Err(HubError::InvalidInput(_))));
    }

    #[test]
    fn test_bad_pattern_fails_at_build() {
        let result = FormSchema::builder()
            .field("code")
            .pattern("[", "bad")
            .build();
        assert!(matches!(result, Err(HubError::Pattern(_))));
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let field = FieldRules {
            name: "title".to_string(),
            rules: vec![Rule::required("required"), Rule::min_len(3, "short")],
        };
        assert_eq!(field.first_failure(""), Some("required"));
        assert_eq!(field.first_failure("ab"), Some("short"));
        assert_eq!(field.first_failure("abc"), None);
    }
}
