//! Runtime kind predicates and structural equality.
//!
//! Every predicate takes `Option<&Value>` so that an absent field
//! (`None`, the JSON "undefined") can be told apart from an explicit `null`.

use serde_json::{Map, Value};

pub fn is_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

pub fn is_number(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Number(_)))
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(_)))
}

pub fn is_null(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Null))
}

pub fn is_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(_)))
}

/// Returns true for JSON objects only; arrays and `null` are not objects.
pub fn is_object(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Object(_)))
}

pub fn is_undefined(value: Option<&Value>) -> bool {
    value.is_none()
}

pub fn is_empty_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(items)) if items.is_empty())
}

/// Structural equality between two JSON values.
///
/// Arrays are equal when they have the same length and pairwise-equal
/// elements in order. Objects are equal when they have the same key set and
/// every key maps to equal values, regardless of key order. Numbers compare
/// by numeric value, so `1` equals `1.0`. The relation is symmetric.
///
/// # Example
///
/// ```rust
/// use shapecheck::predicates::deep_eq;
/// use serde_json::json;
///
/// assert!(deep_eq(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})));
/// assert!(!deep_eq(&json!([1]), &json!([1, 2])));
/// ```
pub fn deep_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => array_deep_eq(a, b),
        (Value::Object(a), Value::Object(b)) => object_deep_eq(a, b),
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                a == b
            } else if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                a == b
            } else {
                a.as_f64() == b.as_f64()
            }
        }
        _ => a == b,
    }
}

fn array_deep_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| deep_eq(a, b))
}

fn object_deep_eq(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, a)| b.get(key).is_some_and(|b| deep_eq(a, b)))
}
