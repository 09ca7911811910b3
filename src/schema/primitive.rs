//! Primitive kind validators.
//!
//! Each factory returns a validator that passes iff the value has exactly the
//! expected JSON kind. No coercion is performed: `"1"` is not a number and
//! an absent field is not `null`.

use serde_json::Value;
use stillwater::Validation;

use crate::predicates;

use super::validator::{Failure, FailureType, ValidationResult, Validator, ValidatorKind};

fn kind_check(
    kind: ValidatorKind,
    expected: FailureType,
    matches: fn(Option<&Value>) -> bool,
) -> Validator {
    Validator::new(kind, move |value| -> ValidationResult {
        if matches(value) {
            Validation::Success(())
        } else {
            Validation::Failure(Failure::new(value, expected))
        }
    })
}

/// Creates a validator accepting JSON strings.
///
/// # Example
///
/// ```rust
/// use shapecheck::string;
/// use serde_json::json;
///
/// assert!(string().validate(Some(&json!("hello"))).is_success());
/// assert!(string().validate(Some(&json!(1))).is_failure());
/// assert!(string().validate(None).is_failure());
/// ```
pub fn string() -> Validator {
    kind_check(ValidatorKind::String, FailureType::String, predicates::is_string)
}

/// Creates a validator accepting JSON numbers, integral or not.
pub fn number() -> Validator {
    kind_check(ValidatorKind::Number, FailureType::Number, predicates::is_number)
}

/// Creates a validator accepting `true` and `false`.
pub fn boolean() -> Validator {
    kind_check(ValidatorKind::Boolean, FailureType::Boolean, predicates::is_boolean)
}

/// Creates a validator accepting only an explicit `null`.
pub fn nil() -> Validator {
    kind_check(ValidatorKind::Nil, FailureType::Null, predicates::is_null)
}
