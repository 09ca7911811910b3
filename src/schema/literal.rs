//! Literal value matching.

use serde_json::Value;
use stillwater::Validation;

use crate::predicates::deep_eq;

use super::validator::{Failure, FailureType, ValidationResult, Validator, ValidatorKind};

/// Creates a validator that passes only for values structurally equal to `expected`.
///
/// This is an equality check, not a type check: arrays must match element
/// by element and objects key by key (see [`deep_eq`]). An absent field
/// never matches.
///
/// # Example
///
/// ```rust
/// use shapecheck::literal;
/// use serde_json::json;
///
/// let state = literal(json!({"happy": true}));
///
/// assert!(state.validate(Some(&json!({"happy": true}))).is_success());
/// assert!(state.validate(Some(&json!({"happy": false}))).is_failure());
/// ```
pub fn literal(expected: impl Into<Value>) -> Validator {
    let expected = expected.into();

    Validator::new(ValidatorKind::Literal, move |value| -> ValidationResult {
        match value {
            Some(value) if deep_eq(&expected, value) => Validation::Success(()),
            _ => Validation::Failure(
                Failure::new(value, FailureType::Literal).with_literal(expected.clone()),
            ),
        }
    })
}
