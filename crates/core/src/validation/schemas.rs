//! The rule sets each admin form declares.
//!
//! Messages are carried verbatim from the production forms -- including the
//! slug and description chains reusing the name-field copy. The settings
//! and skills forms declare no rules at all, and the work form leaves
//! `url`, `git`, and `description` ungated.

use super::rules::{FieldRules, Schema};

/// Rules for the work-item form.
pub fn work_schema() -> Schema {
    Schema::new(vec![
        FieldRules::new("name")
            .required("Name is required")
            .min_length(3, "Name must be longer than 2 characters")
            .max_length(30, "Name must be less than 30 characters"),
        FieldRules::new("slug")
            .required("Slug is required")
            .min_length(3, "Name must be longer than 2 characters")
            .max_length(30, "Name must be less than 30 characters"),
        FieldRules::new("weight")
            .required("Weight is required")
            .pattern("[0-9]", "Weight must be a number"),
    ])
}

/// Rules for the about-timeline form.
pub fn about_schema() -> Schema {
    Schema::new(vec![
        FieldRules::new("year_from")
            .required("Year From is required")
            .pattern(r"^\d{4}$", "Year must be in format YYYY"),
        FieldRules::new("year_to").pattern(r"^\d{4}$", "Year must be in format YYYY"),
        FieldRules::new("description")
            .required("Description is required")
            .min_length(10, "Name must be longer than 10 characters")
            .max_length(400, "Name must be less than 400 characters"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::evaluate;
    use serde_json::json;

    fn map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().expect("test data is an object").clone()
    }

    #[test]
    fn work_schema_passes_complete_item() {
        let errors = evaluate(
            &work_schema(),
            &map(json!({ "name": "Portfolio", "slug": "portfolio", "weight": "10" })),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn work_schema_blocks_empty_required_fields() {
        let errors = evaluate(&work_schema(), &map(json!({ "name": "", "weight": "" })));

        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
        assert_eq!(errors.get("slug").map(String::as_str), Some("Slug is required"));
        assert_eq!(
            errors.get("weight").map(String::as_str),
            Some("Weight is required")
        );
    }

    #[test]
    fn work_schema_rejects_non_numeric_weight() {
        let errors = evaluate(
            &work_schema(),
            &map(json!({ "name": "Portfolio", "slug": "portfolio", "weight": "abc" })),
        );
        assert_eq!(
            errors.get("weight").map(String::as_str),
            Some("Weight must be a number")
        );
    }

    #[test]
    fn about_schema_validates_year_formats() {
        let ok = evaluate(
            &about_schema(),
            &map(json!({
                "year_from": "1998",
                "year_to": "2004",
                "description": "First steps with computers",
            })),
        );
        assert!(ok.is_empty());

        let errors = evaluate(
            &about_schema(),
            &map(json!({
                "year_from": "98",
                "year_to": "19980",
                "description": "First steps with computers",
            })),
        );
        assert_eq!(
            errors.get("year_from").map(String::as_str),
            Some("Year must be in format YYYY")
        );
        assert_eq!(
            errors.get("year_to").map(String::as_str),
            Some("Year must be in format YYYY")
        );
    }

    #[test]
    fn about_schema_allows_open_ended_timeline() {
        // `year_to` is optional: an entry that is still ongoing omits it.
        let errors = evaluate(
            &about_schema(),
            &map(json!({
                "year_from": "2019",
                "description": "Freelance work and side projects",
            })),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn about_schema_bounds_description_length() {
        let errors = evaluate(
            &about_schema(),
            &map(json!({ "year_from": "2019", "description": "too short" })),
        );
        assert_eq!(
            errors.get("description").map(String::as_str),
            Some("Name must be longer than 10 characters")
        );

        let errors = evaluate(
            &about_schema(),
            &map(json!({ "year_from": "2019", "description": "x".repeat(401) })),
        );
        assert_eq!(
            errors.get("description").map(String::as_str),
            Some("Name must be less than 400 characters")
        );
    }
}
