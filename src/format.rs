//! Human-readable messages for failure records.
//!
//! [`format_failed_decode`] is a decision table keyed on the failure's
//! wrapper and expected type. Most rows describe a data mismatch as
//! `Expected <expected> but got <actual> at <path>`, with values rendered as
//! compact JSON. A few rows describe a misbuilt schema instead and carry
//! multi-line usage guidance.

use serde_json::Value;

use crate::error::FailedDecode;
use crate::schema::{FailureType, Wrapper};

/// Renders a value for a message; an absent value renders as `undefined`.
///
/// # Example
///
/// ```rust
/// use shapecheck::format::format_json;
/// use serde_json::json;
///
/// assert_eq!(format_json(Some(&json!("a"))), "\"a\"");
/// assert_eq!(format_json(Some(&json!([1, 2]))), "[1,2]");
/// assert_eq!(format_json(None), "undefined");
/// ```
pub fn format_json(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

/// Formats one failure record into its message.
///
/// A failure at the root (an empty path) omits the ` at <path>` suffix.
pub fn format_failed_decode(failure: &FailedDecode) -> String {
    let actual = format_json(failure.actual.as_ref());
    let at = location(&failure.path);
    let expected_value = format_json(failure.expected_value.as_ref());

    match (failure.wrapper, failure.expected_type) {
        (None, FailureType::Validator) => non_validator_guidance(&at),

        (Some(Wrapper::Array), FailureType::None) => empty_array_guidance(&actual, &at),

        (Some(Wrapper::Union), FailureType::Unknown) => union_arity_guidance(),
        (Some(Wrapper::Union), _) => format!(
            "Expected union to match one of specified types but none matched for value {}{}",
            actual, at
        ),

        (Some(Wrapper::Tuple), FailureType::Validator) => tuple_arity_guidance(),
        (Some(Wrapper::Tuple), FailureType::None) => match &failure.expected_value {
            Some(length) => format!(
                "Expected tuple of length {} but got {} of length {}{}",
                length,
                actual,
                actual_len(failure.actual.as_ref()),
                at
            ),
            None => format!("Expected tuple but got {}{}", actual, at),
        },

        (Some(Wrapper::Optional), FailureType::Object) => format!(
            "Expected undefined or specified schema but got {}{}",
            actual, at
        ),
        (Some(Wrapper::Optional), FailureType::Validator) => optional_rule_guidance(),
        (Some(Wrapper::Optional), FailureType::Literal) => format!(
            "Expected undefined or literal {} but got {}{}",
            expected_value, actual, at
        ),
        (Some(Wrapper::Optional), FailureType::None) => format!(
            "Expected undefined or one of specified types but got {}{}",
            actual, at
        ),
        (Some(Wrapper::Optional), FailureType::Unknown) => {
            format!("Expected undefined or array but got {}{}", actual, at)
        }
        (Some(Wrapper::Optional), expected) => format!(
            "Expected undefined or {} but got {}{}",
            expected, actual, at
        ),

        (_, FailureType::Literal) => format!(
            "Expected literal {} but got {}{}",
            expected_value, actual, at
        ),

        (Some(Wrapper::Array), FailureType::Unknown) => {
            format!("Expected array but got {}{}", actual, at)
        }
        (Some(Wrapper::Array), expected) => format!(
            "Expected array of {} but got {}{}",
            expected, actual, at
        ),

        (_, expected) => format!("Expected {} but got {}{}", expected, actual, at),
    }
}

fn location(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at {}", path)
    }
}

fn actual_len(actual: Option<&Value>) -> usize {
    actual.and_then(Value::as_array).map_or(0, Vec::len)
}

fn non_validator_guidance(at: &str) -> String {
    format!(
        "Expected schema fields to be a validator or another schema but got non validator{}\n\
         hint: it is possible that you forgot to call the validator factory e.g this is wrong:\n\
         Schema::new().field(\"field\", string)\n\
         the right way is this:\n\
         Schema::new().field(\"field\", string())\n\
         so as a rule of thumb: \"you are always calling the validator\"",
        at
    )
}

fn empty_array_guidance(actual: &str, at: &str) -> String {
    format!(
        "Expected empty array but got {}{}\n\
         hint: an array validator without an item rule only accepts []\n\
         you should pass one validator e.g:\n\
         Schema::new().field(\"field\", array(string())) // array of strings",
        actual, at
    )
}

fn union_arity_guidance() -> String {
    "Expected union to have two or more validators\n\
     hint: you passed union with less than two validators to choose from\n\
     you should pass at least two validators e.g:\n\
     Schema::new().field(\"field\", union([string(), number()])) // string or number"
        .to_string()
}

fn tuple_arity_guidance() -> String {
    "Expected tuple to have at least one validator\n\
     hint: you passed tuple with no validators\n\
     you should pass at least one validator e.g:\n\
     Schema::new().field(\"field\", tuple([string(), number()])) // [string, number]"
        .to_string()
}

fn optional_rule_guidance() -> String {
    "Expected optional to have a validator\n\
     hint: you passed optional without a validator\n\
     you should pass one validator so that if the field exists\n\
     we can validate it by the specified type e.g:\n\
     Schema::new().field(\"field\", optional(string())) // string or undefined"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(
        actual: Option<Value>,
        expected_type: FailureType,
        wrapper: Option<Wrapper>,
    ) -> FailedDecode {
        FailedDecode {
            actual,
            expected_type,
            expected_value: None,
            path: "field".to_string(),
            wrapper,
        }
    }

    #[test]
    fn test_default_row() {
        let message = format_failed_decode(&record(None, FailureType::String, None));
        assert_eq!(message, "Expected string but got undefined at field");

        let message = format_failed_decode(&record(Some(json!(1)), FailureType::Null, None));
        assert_eq!(message, "Expected null but got 1 at field");
    }

    #[test]
    fn test_non_validator_guidance() {
        let message = format_failed_decode(&record(None, FailureType::Validator, None));
        assert!(message.starts_with(
            "Expected schema fields to be a validator or another schema but got non validator at field\n"
        ));
        assert!(message.contains("you forgot to call the validator factory"));
    }

    #[test]
    fn test_array_rows() {
        let message = format_failed_decode(&record(
            Some(json!({"a": 1})),
            FailureType::Unknown,
            Some(Wrapper::Array),
        ));
        assert_eq!(message, "Expected array but got {\"a\":1} at field");

        let message = format_failed_decode(&record(
            Some(json!("x")),
            FailureType::Number,
            Some(Wrapper::Array),
        ));
        assert_eq!(message, "Expected array of number but got \"x\" at field");

        let message = format_failed_decode(&record(
            Some(json!([1])),
            FailureType::None,
            Some(Wrapper::Array),
        ));
        assert!(message.starts_with("Expected empty array but got [1] at field\n"));
        assert!(message.contains("array(string())"));
    }

    #[test]
    fn test_union_rows() {
        let message = format_failed_decode(&record(
            Some(json!(true)),
            FailureType::None,
            Some(Wrapper::Union),
        ));
        assert_eq!(
            message,
            "Expected union to match one of specified types but none matched for value true at field"
        );

        let message = format_failed_decode(&record(
            Some(json!("sam")),
            FailureType::Unknown,
            Some(Wrapper::Union),
        ));
        assert!(message.starts_with("Expected union to have two or more validators\n"));
    }

    #[test]
    fn test_tuple_rows() {
        let message = format_failed_decode(&record(
            Some(json!({"from": 1})),
            FailureType::None,
            Some(Wrapper::Tuple),
        ));
        assert_eq!(message, "Expected tuple but got {\"from\":1} at field");

        let mut length = record(Some(json!([1])), FailureType::None, Some(Wrapper::Tuple));
        length.expected_value = Some(json!(2));
        assert_eq!(
            format_failed_decode(&length),
            "Expected tuple of length 2 but got [1] of length 1 at field"
        );

        let message = format_failed_decode(&record(
            Some(json!([])),
            FailureType::Validator,
            Some(Wrapper::Tuple),
        ));
        assert!(message.starts_with("Expected tuple to have at least one validator\n"));
    }

    #[test]
    fn test_optional_rows() {
        let message = format_failed_decode(&record(
            Some(json!("boi")),
            FailureType::Object,
            Some(Wrapper::Optional),
        ));
        assert_eq!(
            message,
            "Expected undefined or specified schema but got \"boi\" at field"
        );

        let message = format_failed_decode(&record(
            Some(json!(537457)),
            FailureType::String,
            Some(Wrapper::Optional),
        ));
        assert_eq!(message, "Expected undefined or string but got 537457 at field");

        let message = format_failed_decode(&record(None, FailureType::Validator, Some(Wrapper::Optional)));
        assert!(message.starts_with("Expected optional to have a validator\n"));

        let message = format_failed_decode(&record(
            Some(json!("x")),
            FailureType::Unknown,
            Some(Wrapper::Optional),
        ));
        assert_eq!(message, "Expected undefined or array but got \"x\" at field");

        let mut literal = record(Some(json!("b")), FailureType::Literal, Some(Wrapper::Optional));
        literal.expected_value = Some(json!("a"));
        assert_eq!(
            format_failed_decode(&literal),
            "Expected undefined or literal \"a\" but got \"b\" at field"
        );
    }

    #[test]
    fn test_literal_row() {
        let mut literal = record(
            Some(json!([{"x": {"y": {"a": [1, 2, 3]}}}])),
            FailureType::Literal,
            None,
        );
        literal.expected_value = Some(json!([{"x": {"y": {"a": [1, 2, 3, 4]}}}]));
        assert_eq!(
            format_failed_decode(&literal),
            "Expected literal [{\"x\":{\"y\":{\"a\":[1,2,3,4]}}}] but got [{\"x\":{\"y\":{\"a\":[1,2,3]}}}] at field"
        );

        literal.wrapper = Some(Wrapper::Array);
        assert!(format_failed_decode(&literal).starts_with("Expected literal "));
    }

    #[test]
    fn test_root_failure_omits_location() {
        let mut root = record(Some(json!([1])), FailureType::None, Some(Wrapper::Array));
        root.path = String::new();
        assert!(format_failed_decode(&root).starts_with("Expected empty array but got [1]\nhint: "));

        let mut root = record(Some(json!(3)), FailureType::Object, None);
        root.path = String::new();
        assert_eq!(format_failed_decode(&root), "Expected object but got 3");
    }
}
