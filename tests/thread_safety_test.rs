//! Tests for sharing decoders and validators across threads.

use shapecheck::{array, create_decoder, number, optional, string, union, Schema};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_decoding() {
    let decoder = Arc::new(
        create_decoder(
            Schema::new()
                .field("name", string())
                .field("age", number())
                .field("tags", optional(array(string()))),
        )
        .unwrap(),
    );

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let decoder = Arc::clone(&decoder);
            thread::spawn(move || {
                let json = json!({
                    "name": format!("User{}", i),
                    "age": 20 + i
                });
                assert!(decoder.decode(&json).is_ok());

                let bad = json!({"name": i, "age": 20 + i});
                let err = decoder.decode(&bad).unwrap_err();
                assert_eq!(err.to_string(), format!("Expected string but got {} at name", i));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_shared_validator_across_schemas() {
    let id = union([string(), number()]);

    let users = Schema::new().field("id", id.clone());
    let orders = Schema::new().field("id", id.clone()).field("user", id);

    let handles: Vec<_> = [users, orders]
        .into_iter()
        .map(|schema| {
            thread::spawn(move || {
                let decoder = create_decoder(schema).unwrap();
                assert!(decoder.decode(&json!({"id": 1, "user": "u-1"})).is_ok());
                assert!(decoder.decode(&json!({"id": true, "user": "u-1"})).is_err());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
