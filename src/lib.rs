//! # Shapecheck
//!
//! Validates untrusted JSON against a declarative, composable schema and
//! reports every structural mismatch with an exact field path.
//!
//! ## Overview
//!
//! A schema is a tree: interior nodes are [`Schema`] mappings from field name
//! to rule, leaves are [`Validator`]s built from small factories. Wrapper
//! combinators ([`array`], [`tuple`], [`union`], [`optional`], [`literal`])
//! compose validators and nested schemas. The decode engine walks a schema
//! and a value together and returns flat [`FailedDecode`] records whose
//! paths look like `items[2].name`.
//!
//! ## Core Types
//!
//! - [`Schema`] / [`Rule`]: the schema tree
//! - [`Validator`]: a pure, shareable check returning a [`ValidationResult`]
//! - [`FailedDecode`]: one failure with an absolute path
//! - [`Decoder`]: a bound schema; [`Decoder::decode`] returns the input
//!   reference unchanged or the first failure as a [`DecodeError`]
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::{array, create_decoder, nil, number, string, tuple, union, Schema};
//! use serde_json::json;
//!
//! let decoder = create_decoder(Schema::new()
//!     .field("name", Schema::new()
//!         .field("first", string())
//!         .field("last", string()))
//!     .field("friends", array(number()))
//!     .field("letters", array(Schema::new()
//!         .field("letter", string())
//!         .field("kind", tuple([string(), number()]))
//!         .field("next", union([nil(), string()])))))
//!     .unwrap();
//!
//! let json = json!({
//!     "name": {"first": "dummy", "last": "master"},
//!     "friends": [65346, 34478],
//!     "letters": [
//!         {"letter": "w", "kind": ["letter", 1], "next": "t"},
//!         {"letter": "t", "kind": ["letter", 2], "next": null}
//!     ]
//! });
//! assert!(decoder.decode(&json).is_ok());
//!
//! let bad = json!({
//!     "name": {"first": "dummy", "last": "master"},
//!     "friends": [],
//!     "letters": [{"letter": "w", "kind": ["letter", 1], "next": 3}]
//! });
//! assert_eq!(
//!     decoder.decode(&bad).unwrap_err().to_string(),
//!     "Expected union to match one of specified types but none matched for value 3 at letters[0].next"
//! );
//! ```

pub mod decode;
pub mod error;
pub mod format;
pub mod path;
pub mod predicates;
pub mod schema;

pub use decode::{create_decoder, get_failed_decodes, Decoder};
pub use error::{DecodeError, FailedDecode, FailedDecodes, SchemaError};
pub use path::PathSegment;
pub use schema::{
    array, boolean, empty_array, literal, nil, number, optional, string, tuple, union, Failure,
    FailureType, Rule, Schema, ValidationResult, Validator, ValidatorKind, Wrapper,
};
