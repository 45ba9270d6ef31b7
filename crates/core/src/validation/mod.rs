//! Declarative field validation for the admin forms.
//!
//! A [`Schema`](rules::Schema) is an ordered list of per-field rule chains;
//! the evaluator short-circuits on the first failing constraint per field,
//! so an empty required field reports "required" and never its length or
//! pattern rules.

pub mod evaluator;
pub mod rules;
pub mod schemas;

pub use evaluator::{evaluate, evaluate_field};
pub use rules::{Check, Constraint, FieldErrors, FieldRules, Schema, Violation};
