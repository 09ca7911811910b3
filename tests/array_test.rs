//! Tests for array validation through the decoder.

use shapecheck::{
    array, boolean, create_decoder, empty_array, get_failed_decodes, number, string, FailureType,
    Schema,
};
use serde_json::json;

#[test]
fn test_array_of_strings() {
    let decoder = create_decoder(Schema::new().field("toys", array(string()))).unwrap();

    assert!(decoder
        .decode(&json!({"toys": ["car", "teddyBear", "nuclearBomb"]}))
        .is_ok());
    assert!(decoder.decode(&json!({"toys": []})).is_ok());
}

#[test]
fn test_non_array_value() {
    let decoder = create_decoder(Schema::new().field("toys", array(string()))).unwrap();

    let err = decoder.decode(&json!({"toys": "car"})).unwrap_err();
    assert_eq!(err.to_string(), "Expected array but got \"car\" at toys");

    let err = decoder.decode(&json!({})).unwrap_err();
    assert_eq!(err.to_string(), "Expected array but got undefined at toys");
}

#[test]
fn test_empty_array_validator() {
    let decoder = create_decoder(Schema::new().field("toys", empty_array())).unwrap();

    assert!(decoder.decode(&json!({"toys": []})).is_ok());

    let err = decoder.decode(&json!({"toys": ["car"]})).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Expected empty array but got [\"car\"] at toys\n"));
    assert!(message.contains("you should pass one validator"));
}

#[test]
fn test_array_of_objects() {
    let decoder = create_decoder(
        Schema::new().field(
            "toys",
            array(Schema::new().field("name", string()).field("isSafe", boolean())),
        ),
    )
    .unwrap();

    assert!(decoder
        .decode(&json!({"toys": [
            {"name": "car", "isSafe": true},
            {"name": "teddyBear", "isSafe": false}
        ]}))
        .is_ok());
}

#[test]
fn test_array_of_objects_with_other_structure() {
    let decoder = create_decoder(
        Schema::new().field(
            "toys",
            array(
                Schema::new()
                    .field("firstName", string())
                    .field("isAdult", boolean())
                    .field("age", number()),
            ),
        ),
    )
    .unwrap();

    let err = decoder
        .decode(&json!({"toys": [
            {"name": "car", "isSafe": true},
            {"name": "teddyBear", "isSafe": false}
        ]}))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected string but got undefined at toys[0].firstName"
    );
}

#[test]
fn test_array_of_objects_with_non_object_item() {
    let decoder =
        create_decoder(Schema::new().field("toys", array(Schema::new().field("name", string()))))
            .unwrap();

    let err = decoder
        .decode(&json!({"toys": [{"name": "car"}, "teddyBear"]}))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected array of object but got \"teddyBear\" at toys[1]"
    );
}

#[test]
fn test_two_dimensional_arrays() {
    let decoder = create_decoder(Schema::new().field("matrix", array(array(number())))).unwrap();

    assert!(decoder
        .decode(&json!({"matrix": [[1, 2, 3], [4, 5, 6], [7, 8, 9]]}))
        .is_ok());

    let err = decoder
        .decode(&json!({"matrix": [1, 2, 3, 4, 5, 6, 7, 8, 9]}))
        .unwrap_err();
    assert_eq!(err.to_string(), "Expected array but got 1 at matrix[0]");

    let strings = create_decoder(Schema::new().field("matrix", array(array(string())))).unwrap();
    let err = strings
        .decode(&json!({"matrix": [[1, 2, 3], [4, 5, 6]]}))
        .unwrap_err();
    assert_eq!(err.to_string(), "Expected string but got 1 at matrix[0][0]");
}

#[test]
fn test_nested_arrays_of_objects() {
    let decoder = create_decoder(
        Schema::new().field("matrix", array(array(Schema::new().field("value", number())))),
    )
    .unwrap();

    assert!(decoder
        .decode(&json!({"matrix": [
            [{"value": 1}, {"value": 2}],
            [{"value": 3}, {"value": 4}]
        ]}))
        .is_ok());

    let err = decoder
        .decode(&json!({"matrix": [
            [{"value": 1}, {"value": 2}, {"value": 3}],
            [{"value": 4}, {"value": 5}, {"haha": "destroyed your schema"}]
        ]}))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected number but got undefined at matrix[1][2].value"
    );
}

#[test]
fn test_lowest_failing_index_is_reported() {
    let schema = Schema::new().field("items", array(number()));
    let failures = get_failed_decodes(&schema.into(), &json!({"items": [0, 1, "a", 3, "b"]}));

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path, "items[2]");
    assert_eq!(failures[0].actual, Some(json!("a")));
    assert_eq!(failures[0].expected_type, FailureType::Number);
    assert!(failures[0].wrapper.is_none());
}
