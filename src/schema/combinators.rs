//! Combinators for composing rules.
//!
//! - [`tuple`]: fixed-length arrays with one rule per position
//! - [`union`]: at least one of several rules must match
//! - [`optional`]: the value may be absent
//!
//! Each factory accepts validators and nested [`Schema`](crate::Schema)s
//! alike. Misbuilt combinators (a union with fewer than two rules, a tuple
//! with none) report themselves when run and are rejected eagerly when bound
//! into a decoder.

use std::sync::Arc;

use serde_json::{json, Value};
use stillwater::Validation;

use crate::decode::check_rule;
use crate::path::PathSegment;
use crate::predicates;

use super::validator::{Failure, FailureType, ValidationResult, Validator, ValidatorKind, Wrapper};
use super::Rule;

/// Creates a validator for fixed-length arrays.
///
/// The value must be an array with exactly as many elements as there are
/// rules; a length mismatch fails regardless of whether the overlapping
/// positions would pass. Positions are then checked in order and the first
/// failure is reported under its index.
///
/// # Example
///
/// ```rust
/// use shapecheck::{number, string, tuple};
/// use serde_json::json;
///
/// let tick = tuple([string(), number()]);
///
/// assert!(tick.validate(Some(&json!(["10/2/1991", 1000]))).is_success());
/// assert!(tick.validate(Some(&json!(["10/2/1991"]))).is_failure());
/// assert!(tick.validate(Some(&json!([1000, "10/2/1991"]))).is_failure());
/// ```
pub fn tuple<I>(rules: I) -> Validator
where
    I: IntoIterator,
    I::Item: Into<Rule>,
{
    let rules: Arc<[Rule]> = rules.into_iter().map(Into::into).collect();
    let positions = Arc::clone(&rules);

    let validator = Validator::new(ValidatorKind::Tuple, move |value| -> ValidationResult {
        if positions.is_empty() {
            return Validation::Failure(
                Failure::new(value, FailureType::Validator).with_wrapper(Wrapper::Tuple),
            );
        }

        let elements = match value {
            Some(Value::Array(elements)) => elements,
            _ => {
                return Validation::Failure(
                    Failure::new(value, FailureType::None).with_wrapper(Wrapper::Tuple),
                )
            }
        };

        if elements.len() != positions.len() {
            return Validation::Failure(
                Failure::new(value, FailureType::None)
                    .with_wrapper(Wrapper::Tuple)
                    .with_literal(json!(positions.len())),
            );
        }

        for (index, (rule, element)) in positions.iter().zip(elements).enumerate() {
            if let Validation::Failure(failure) = check_rule(rule, Some(element)) {
                let path = PathSegment::index(index).nest(failure.path.as_deref());
                return Validation::Failure(Failure {
                    path: Some(path),
                    ..failure
                });
            }
        }

        Validation::Success(())
    })
    .with_rules(Arc::clone(&rules));

    if rules.is_empty() {
        validator.with_misuse(Wrapper::Tuple, FailureType::Validator)
    } else {
        validator
    }
}

/// Creates a validator that passes if any of the rules passes.
///
/// Rules are tried in order and the first match wins. When every rule fails
/// the failure names the union as a whole, not the branch that came closest.
/// At least two rules are required.
///
/// # Example
///
/// ```rust
/// use shapecheck::{nil, string, union};
/// use serde_json::{json, Value};
///
/// let next_letter = union([nil(), string()]);
///
/// assert!(next_letter.validate(Some(&Value::Null)).is_success());
/// assert!(next_letter.validate(Some(&json!("f"))).is_success());
/// assert!(next_letter.validate(Some(&json!(3))).is_failure());
/// ```
pub fn union<I>(rules: I) -> Validator
where
    I: IntoIterator,
    I::Item: Into<Rule>,
{
    let rules: Arc<[Rule]> = rules.into_iter().map(Into::into).collect();
    let branches = Arc::clone(&rules);

    let validator = Validator::new(ValidatorKind::Union, move |value| -> ValidationResult {
        if branches.len() < 2 {
            return Validation::Failure(
                Failure::new(value, FailureType::Unknown).with_wrapper(Wrapper::Union),
            );
        }

        if branches
            .iter()
            .any(|rule| check_rule(rule, value).is_success())
        {
            Validation::Success(())
        } else {
            Validation::Failure(Failure::new(value, FailureType::None).with_wrapper(Wrapper::Union))
        }
    })
    .with_rules(Arc::clone(&rules));

    if rules.len() < 2 {
        validator.with_misuse(Wrapper::Union, FailureType::Unknown)
    } else {
        validator
    }
}

/// Creates a validator that accepts an absent value or one satisfying `rule`.
///
/// Only absence counts as "undefined": an explicit `null` is checked against
/// the rule like any other value. Failures keep the inner type and path and
/// are attributed to the optional wrapper. A nested schema rule rejects
/// non-object values with [`FailureType::Object`].
///
/// # Example
///
/// ```rust
/// use shapecheck::{optional, string};
/// use serde_json::json;
///
/// let nickname = optional(string());
///
/// assert!(nickname.validate(None).is_success());
/// assert!(nickname.validate(Some(&json!("boi"))).is_success());
/// assert!(nickname.validate(Some(&json!(537457))).is_failure());
/// ```
pub fn optional(rule: impl Into<Rule>) -> Validator {
    let rules: Arc<[Rule]> = Arc::from(vec![rule.into()]);
    let inner = Arc::clone(&rules);

    Validator::new(ValidatorKind::Optional, move |value| -> ValidationResult {
        if predicates::is_undefined(value) {
            return Validation::Success(());
        }

        match check_rule(&inner[0], value) {
            Validation::Success(()) => Validation::Success(()),
            Validation::Failure(failure) if failure.is_misuse() => Validation::Failure(failure),
            Validation::Failure(failure) => {
                Validation::Failure(failure.with_wrapper(Wrapper::Optional))
            }
        }
    })
    .with_rules(rules)
}
