//! Property-based invariant tests for recipe search and form validation.
//!
//! Verifies:
//! 1. A blank term returns every record in order
//! 2. Every returned record contains the term in its title or summary
//! 3. Every record left out does not contain the term
//! 4. Filtering is idempotent
//! 5. The result is a subsequence of the input (order preserved)
//! 6. A recipe form with every rule satisfied validates clean
//! 7. A blank required field reports only its "required" message

use proptest::prelude::*;
use recipe_hub::{filter, validate_recipe, Recipe, RecipeDraft};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,16}"
}

fn arb_records() -> impl Strategy<Value = Vec<Recipe>> {
    prop::collection::vec((arb_text(), arb_text()), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (title, summary))| Recipe {
                id: i as u32 + 1,
                title,
                summary,
                image: String::new(),
                ingredients: vec![],
                instructions: vec![],
            })
            .collect()
    })
}

fn arb_term() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,4}"
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

// A blank term selects everything; any other term is matched untrimmed.
fn contains_term(recipe: &Recipe, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    recipe.title.to_lowercase().contains(&needle) || recipe.summary.to_lowercase().contains(&needle)
}

fn valid_draft() -> RecipeDraft {
    RecipeDraft {
        title: "Pancakes".to_string(),
        summary: "Fluffy breakfast pancakes".to_string(),
        image: "https://example.com/p.jpg".to_string(),
        ingredients: "flour\neggs".to_string(),
        instructions: "mix\nfry".to_string(),
    }
}

// ── Search ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn blank_term_is_identity(records in arb_records(), blank in arb_blank()) {
        let result: Vec<Recipe> = filter(&records, &blank).into_iter().cloned().collect();
        prop_assert_eq!(result, records);
    }

    #[test]
    fn every_hit_contains_term(records in arb_records(), term in arb_term()) {
        for recipe in filter(&records, &term) {
            prop_assert!(contains_term(recipe, &term));
        }
    }

    #[test]
    fn every_miss_lacks_term(records in arb_records(), term in arb_term()) {
        let hits: Vec<u32> = filter(&records, &term).iter().map(|r| r.id).collect();
        for recipe in &records {
            if !hits.contains(&recipe.id) {
                prop_assert!(!contains_term(recipe, &term));
            }
        }
    }

    #[test]
    fn filter_is_idempotent(records in arb_records(), term in arb_term()) {
        let once: Vec<Recipe> = filter(&records, &term).into_iter().cloned().collect();
        let twice: Vec<Recipe> = filter(&once, &term).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn result_preserves_input_order(records in arb_records(), term in arb_term()) {
        let ids: Vec<u32> = filter(&records, &term).iter().map(|r| r.id).collect();
        // ids are assigned in input order, so a subsequence is strictly increasing
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}

// ── Validation ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn satisfied_rules_validate_clean(
        title in "[a-zA-Z]{3,20}",
        summary in "[a-zA-Z ]{10,40}",
        host in "[a-z]{1,10}",
        extra_lines in prop::collection::vec("[a-z]{1,8}", 2..5),
    ) {
        prop_assume!(summary.trim().len() >= 10);
        let draft = RecipeDraft {
            title,
            summary,
            image: format!("https://{}.com/x.jpg", host),
            ingredients: extra_lines.join("\n"),
            instructions: extra_lines.join("\n\n"),
        };
        let result = validate_recipe(&draft).unwrap();
        prop_assert!(result.is_empty(), "unexpected errors: {}", result);
    }

    #[test]
    fn blank_title_reports_required_only(blank in arb_blank()) {
        let draft = RecipeDraft { title: blank, ..valid_draft() };
        let result = validate_recipe(&draft).unwrap();
        prop_assert_eq!(result.get("title"), Some("Recipe title is required"));
        prop_assert_eq!(result.len(), 1);
    }
}
