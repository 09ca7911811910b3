//! Array validation.
//!
//! [`array`] checks every element against one item rule and reports the
//! lowest-indexed failing element. [`empty_array`] is the rule-less form that
//! only accepts `[]`.

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::decode::check_rule;
use crate::path::PathSegment;
use crate::predicates;

use super::validator::{Failure, FailureType, ValidationResult, Validator, ValidatorKind, Wrapper};
use super::Rule;

/// Creates a validator for arrays whose items all satisfy `rule`.
///
/// The rule may be a validator or a nested [`Schema`](crate::Schema). Items
/// are checked in order and the first failure is reported with its index
/// prepended to the path, e.g. `[1]` or `[0].name`. An empty array always
/// passes. A non-array value fails with [`FailureType::Unknown`], and so does
/// a non-object element under a schema rule with [`FailureType::Object`].
///
/// # Example
///
/// ```rust
/// use shapecheck::{array, number, Schema};
/// use serde_json::json;
///
/// let numbers = array(number());
/// assert!(numbers.validate(Some(&json!([1, 2, 3]))).is_success());
/// assert!(numbers.validate(Some(&json!([]))).is_success());
/// assert!(numbers.validate(Some(&json!([1, "x"]))).is_failure());
///
/// let points = array(Schema::new().field("x", number()));
/// assert!(points.validate(Some(&json!([{"x": 1}, {"x": 2}]))).is_success());
/// ```
pub fn array(rule: impl Into<Rule>) -> Validator {
    let rules: Arc<[Rule]> = Arc::from(vec![rule.into()]);
    let items = Arc::clone(&rules);

    Validator::new(ValidatorKind::Array, move |value| -> ValidationResult {
        let elements = match value {
            Some(Value::Array(elements)) => elements,
            _ => return Validation::Failure(non_array(value)),
        };

        let rule = &items[0];
        let first_failure = elements.iter().enumerate().find_map(|(index, element)| {
            match check_rule(rule, Some(element)) {
                Validation::Success(()) => None,
                Validation::Failure(failure) => Some(at_index(rule, index, failure)),
            }
        });

        match first_failure {
            Some(failure) => Validation::Failure(failure),
            None => Validation::Success(()),
        }
    })
    .with_rules(rules)
}

/// Creates a validator that only accepts an empty array.
///
/// A non-empty array fails with [`FailureType::None`], which the formatter
/// reports as a missing item rule.
///
/// # Example
///
/// ```rust
/// use shapecheck::empty_array;
/// use serde_json::json;
///
/// assert!(empty_array().validate(Some(&json!([]))).is_success());
/// assert!(empty_array().validate(Some(&json!([1]))).is_failure());
/// ```
pub fn empty_array() -> Validator {
    Validator::new(ValidatorKind::Array, |value| -> ValidationResult {
        if !predicates::is_array(value) {
            Validation::Failure(non_array(value))
        } else if predicates::is_empty_array(value) {
            Validation::Success(())
        } else {
            Validation::Failure(
                Failure::new(value, FailureType::None).with_wrapper(Wrapper::Array),
            )
        }
    })
}

fn non_array(value: Option<&Value>) -> Failure {
    Failure::new(value, FailureType::Unknown).with_wrapper(Wrapper::Array)
}

/// Re-roots an element failure under its index.
///
/// The element's own wrapper is kept so the most specific message wins. A
/// non-object element under a schema rule is attributed to the array.
fn at_index(rule: &Rule, index: usize, failure: Failure) -> Failure {
    let wrapper = match rule {
        Rule::Schema(_) if failure.path.is_none() => Some(Wrapper::Array),
        _ => failure.wrapper,
    };
    Failure {
        path: Some(PathSegment::index(index).nest(failure.path.as_deref())),
        wrapper,
        ..failure
    }
}
