//! Rule evaluator -- pure logic, no I/O.

use regex::Regex;
use serde_json::Value;

use super::rules::{Check, Constraint, FieldErrors, FieldRules, Schema, Violation};

/// Evaluate a whole schema against the current form values.
///
/// Returns the first failure per field; a form submits only when the
/// result is empty.
pub fn evaluate(schema: &Schema, data: &serde_json::Map<String, Value>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for rules in &schema.fields {
        if let Some(violation) = evaluate_field(rules, data.get(rules.field)) {
            errors.insert(violation.field, violation.message);
        }
    }

    errors
}

/// Evaluate one field's rule chain in declaration order, stopping at the
/// first failing constraint.
pub fn evaluate_field(rules: &FieldRules, value: Option<&Value>) -> Option<Violation> {
    for check in &rules.checks {
        if let Some(violation) = evaluate_check(rules.field, check, value) {
            return Some(violation);
        }
    }
    None
}

fn violation(field: &str, check: &Check) -> Violation {
    Violation {
        field: field.to_string(),
        message: check.message.to_string(),
    }
}

fn evaluate_check(field: &str, check: &Check, value: Option<&Value>) -> Option<Violation> {
    match check.constraint {
        Constraint::Required => evaluate_required(field, check, value),
        Constraint::MinLength(min) => {
            let s = present_str(value)?;
            (s.len() < min).then(|| violation(field, check))
        }
        Constraint::MaxLength(max) => {
            let s = present_str(value)?;
            (s.len() > max).then(|| violation(field, check))
        }
        Constraint::Pattern(pattern) => {
            let s = present_str(value)?;
            match Regex::new(pattern) {
                Ok(re) if !re.is_match(s) => Some(violation(field, check)),
                // A malformed pattern in a rule declaration silently passes.
                _ => None,
            }
        }
    }
}

fn evaluate_required(field: &str, check: &Check, value: Option<&Value>) -> Option<Violation> {
    match value {
        None | Some(Value::Null) => Some(violation(field, check)),
        Some(Value::String(s)) if s.is_empty() => Some(violation(field, check)),
        _ => None,
    }
}

/// Length and pattern constraints only apply to present, non-empty string
/// values; absence is the `Required` constraint's concern.
fn present_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(|v| v.as_str()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::FieldRules;

    fn data(pairs: &[(&str, &str)]) -> serde_json::Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn required_fails_on_missing_null_and_empty() {
        let rules = FieldRules::new("name").required("Name is required");

        assert!(evaluate_field(&rules, None).is_some());
        assert!(evaluate_field(&rules, Some(&Value::Null)).is_some());
        assert!(evaluate_field(&rules, Some(&Value::String(String::new()))).is_some());
        assert!(evaluate_field(&rules, Some(&Value::String("ok".into()))).is_none());
    }

    #[test]
    fn first_failing_rule_wins() {
        let rules = FieldRules::new("name")
            .required("Name is required")
            .min_length(3, "Name must be longer than 2 characters");

        // Empty value violates both; only the required message surfaces.
        let violation =
            evaluate_field(&rules, Some(&Value::String(String::new()))).expect("should fail");
        assert_eq!(violation.message, "Name is required");

        let violation =
            evaluate_field(&rules, Some(&Value::String("ab".into()))).expect("should fail");
        assert_eq!(violation.message, "Name must be longer than 2 characters");
    }

    #[test]
    fn pattern_skips_empty_optional_values() {
        let rules = FieldRules::new("year_to").pattern(r"^\d{4}$", "Year must be in format YYYY");

        // No required rule, so an empty or missing value passes.
        assert!(evaluate_field(&rules, None).is_none());
        assert!(evaluate_field(&rules, Some(&Value::String(String::new()))).is_none());

        assert!(evaluate_field(&rules, Some(&Value::String("1998".into()))).is_none());
        assert!(evaluate_field(&rules, Some(&Value::String("98".into()))).is_some());
        assert!(evaluate_field(&rules, Some(&Value::String("19980".into()))).is_some());
    }

    #[test]
    fn max_length_rejects_overlong_values() {
        let rules = FieldRules::new("name").max_length(30, "Name must be less than 30 characters");

        assert!(evaluate_field(&rules, Some(&Value::String("x".repeat(30)))).is_none());
        assert!(evaluate_field(&rules, Some(&Value::String("x".repeat(31)))).is_some());
    }

    #[test]
    fn evaluate_reports_first_failure_per_field() {
        let schema = Schema::new(vec![
            FieldRules::new("name").required("Name is required"),
            FieldRules::new("slug").required("Slug is required"),
        ]);

        let errors = evaluate(&schema, &data(&[("name", "Portfolio")]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("slug").map(String::as_str), Some("Slug is required"));
    }

    #[test]
    fn evaluate_is_empty_for_valid_data() {
        let schema = Schema::new(vec![FieldRules::new("name")
            .required("Name is required")
            .min_length(3, "Name must be longer than 2 characters")]);

        assert!(evaluate(&schema, &data(&[("name", "Portfolio")])).is_empty());
    }
}
