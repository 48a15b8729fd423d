//! The forms the apps ship with.

use super::FormSchema;
use crate::config::FormLimits;
use crate::HubError;

/// "Add recipe" form: title, summary, image URL, ingredients and steps.
pub fn recipe_form(limits: &FormLimits) -> Result<FormSchema, HubError> {
    FormSchema::builder()
        .field("title")
        .required("Recipe title is required")
        .min_len(
            limits.title_min_len,
            format!(
                "Recipe title must be at least {} characters",
                limits.title_min_len
            ),
        )
        .field("summary")
        .required("Recipe summary is required")
        .min_len(
            limits.summary_min_len,
            format!(
                "Summary must be at least {} characters",
                limits.summary_min_len
            ),
        )
        .field("image")
        .required("Image URL is required")
        .url("Please enter a valid image URL (starting with http:// or https://)")
        .field("ingredients")
        .required("Ingredients list is required")
        .min_lines(
            limits.min_ingredients,
            format!(
                "Please add at least {} ingredients (one per line)",
                limits.min_ingredients
            ),
        )
        .field("instructions")
        .required("Cooking instructions are required")
        .min_lines(
            limits.min_instructions,
            format!(
                "Please add at least {} cooking steps (one per line)",
                limits.min_instructions
            ),
        )
        .build()
}

/// Sign-up form: username, email and password.
pub fn registration_form(limits: &FormLimits) -> Result<FormSchema, HubError> {
    FormSchema::builder()
        .field("username")
        .required("Username is required")
        .field("email")
        .required("Email is required")
        .email("Invalid email format")
        .field("password")
        .required("Password is required")
        .min_len(
            limits.password_min_len,
            format!(
                "Password must be at least {} characters",
                limits.password_min_len
            ),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_form_fields() {
        let schema = recipe_form(&FormLimits::default()).unwrap();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(
            names,
            vec!["title", "summary", "image", "ingredients", "instructions"]
        );
    }

    #[test]
    fn test_limits_flow_into_messages() {
        let limits = FormLimits {
            title_min_len: 5,
            ..FormLimits::default()
        };
        let schema = recipe_form(&limits).unwrap();
        let title = schema.field("title").unwrap();

        assert_eq!(
            title.first_failure("Soup"),
            Some("Recipe title must be at least 5 characters")
        );
    }

    #[test]
    fn test_registration_form_fields() {
        let schema = registration_form(&FormLimits::default()).unwrap();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["username", "email", "password"]);
    }
}
