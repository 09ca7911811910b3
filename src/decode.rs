//! The recursive decode engine and the decoder entry point.
//!
//! [`get_failed_decodes`] walks a schema and a JSON value side by side and
//! returns every failure with an absolute path. Breadth is exhaustive: every
//! independently failing field is reported. Depth is fail-fast: inside one
//! field's array, tuple or union only the first failure is reported.
//!
//! [`Decoder`] binds a schema once, rejecting misbuilt schemas up front, and
//! then decodes any number of inputs, surfacing the first failure as an
//! error.
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{array, create_decoder, number, string, Schema};
//! use serde_json::json;
//!
//! let decoder = create_decoder(Schema::new()
//!     .field("name", string())
//!     .field("scores", array(number())))
//!     .unwrap();
//!
//! let json = json!({"name": "ada", "scores": [1, 2]});
//! assert!(std::ptr::eq(decoder.decode(&json).unwrap(), &json));
//!
//! let err = decoder.decode(&json!({"name": "ada", "scores": [1, "x"]})).unwrap_err();
//! assert_eq!(err.to_string(), "Expected number but got \"x\" at scores[1]");
//! ```

use serde_json::Value;
use stillwater::Validation;

use crate::error::{DecodeError, FailedDecode, FailedDecodes, SchemaError};
use crate::format::{format_failed_decode, format_json};
use crate::path::{qualify, PathSegment};
use crate::predicates;
use crate::schema::{
    Failure, FailureType, Rule, Schema, ValidationResult, ValidatorKind, Wrapper,
};

/// Computes every failure of `json` against `rule`.
///
/// For a schema root, fields are visited in declaration order and failures
/// are returned depth-first in that order. For a validator root, at most one
/// failure is returned, located by the validator's own relative path.
///
/// # Example
///
/// ```rust
/// use shapecheck::{get_failed_decodes, number, string, Schema};
/// use serde_json::json;
///
/// let schema = Schema::new().field("name", string()).field("age", number());
/// let failures = get_failed_decodes(&schema.into(), &json!({"age": "old"}));
///
/// let paths: Vec<_> = failures.iter().map(|f| f.path.as_str()).collect();
/// assert_eq!(paths, vec!["name", "age"]);
/// ```
pub fn get_failed_decodes(rule: &Rule, json: &Value) -> Vec<FailedDecode> {
    match rule {
        Rule::Schema(schema) => decode_schema(schema, json),
        Rule::Validator(validator) => match validator.validate(Some(json)) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(failure) => {
                let path = failure.path.clone().unwrap_or_default();
                vec![FailedDecode::from_failure(failure, path)]
            }
        },
    }
}

fn decode_schema(schema: &Schema, json: &Value) -> Vec<FailedDecode> {
    let mut failures = Vec::new();

    for (key, rule) in schema.fields() {
        let field = json.get(key);
        match rule {
            Rule::Schema(nested) => match field {
                Some(inner @ Value::Object(_)) => {
                    failures.extend(decode_schema(nested, inner).into_iter().map(|failure| {
                        FailedDecode {
                            path: qualify(key, &failure.path),
                            ..failure
                        }
                    }));
                }
                _ => {
                    tracing::trace!(field = key, "nested schema field is not an object");
                    failures.push(FailedDecode::not_an_object(field, key));
                }
            },
            Rule::Validator(validator) => {
                if let Validation::Failure(failure) = validator.validate(field) {
                    tracing::trace!(field = key, expected = %failure.expected, "field failed");
                    let path = PathSegment::field(key).nest(failure.path.as_deref());
                    failures.push(FailedDecode::from_failure(failure, path));
                }
            }
        }
    }

    failures
}

/// Checks one value against a rule, reporting at most the first failure.
///
/// This is how combinators delegate to their nested rules: a validator is
/// simply run, while a nested schema requires an object and reports the
/// engine's first failure with its path relative to that object.
pub(crate) fn check_rule(rule: &Rule, value: Option<&Value>) -> ValidationResult {
    match rule {
        Rule::Validator(validator) => validator.validate(value),
        Rule::Schema(schema) => match value {
            Some(object @ Value::Object(_)) => match decode_schema(schema, object).into_iter().next()
            {
                Some(failure) => Validation::Failure(failure.into()),
                None => Validation::Success(()),
            },
            _ => Validation::Failure(Failure::new(value, FailureType::Object)),
        },
    }
}

/// A schema bound for decoding.
///
/// Construct with [`create_decoder`] or [`Decoder::new`]. A decoder is
/// immutable, `Send + Sync`, and can be shared freely.
#[derive(Debug, Clone)]
pub struct Decoder {
    root: Rule,
}

impl Decoder {
    /// Binds a schema, verifying its structure once.
    ///
    /// The root must be a [`Schema`] or an array validator. Every combinator
    /// in the tree is checked for arity misuse (a union with fewer than two
    /// rules, a tuple with none); the first one found is reported with its
    /// dotted path and usage guidance.
    pub fn new(root: impl Into<Rule>) -> Result<Self, SchemaError> {
        let root = root.into();

        if let Rule::Validator(validator) = &root {
            if validator.kind() != ValidatorKind::Array {
                return Err(SchemaError::InvalidRoot {
                    kind: validator.kind(),
                });
            }
        }

        if let Err(err) = check_construction(&root, "") {
            tracing::debug!(error = %err, "rejected schema");
            return Err(err);
        }

        let fields = match &root {
            Rule::Schema(schema) => schema.len(),
            Rule::Validator(_) => 0,
        };
        tracing::debug!(fields, "decoder bound");

        Ok(Self { root })
    }

    /// Returns the bound schema.
    pub fn schema(&self) -> &Rule {
        &self.root
    }

    /// Decodes `json`, returning the very same reference on success.
    ///
    /// All failures are computed but only the first, in schema order, is
    /// returned. Use [`Decoder::validate`] to get all of them.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Shape`] if `json` is not an object (or not an array
    ///   for an array-validator root)
    /// - [`DecodeError::Failed`] carrying the first failure otherwise
    pub fn decode<'a>(&self, json: &'a Value) -> Result<&'a Value, DecodeError> {
        self.check_shape(json)?;

        let failures = get_failed_decodes(&self.root, json);
        let messages: Vec<String> = failures.iter().map(format_failed_decode).collect();

        match failures.into_iter().zip(messages).next() {
            None => Ok(json),
            Some((failure, message)) => {
                tracing::debug!(path = %failure.path, "decode failed");
                Err(DecodeError::Failed { message, failure })
            }
        }
    }

    /// Validates `json`, accumulating every failure.
    ///
    /// A shape mismatch at the root is reported as a single failure at the
    /// empty path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{create_decoder, number, string, Schema};
    /// use serde_json::json;
    /// use stillwater::Validation;
    ///
    /// let decoder = create_decoder(Schema::new()
    ///     .field("name", string())
    ///     .field("age", number()))
    ///     .unwrap();
    ///
    /// match decoder.validate(&json!({})) {
    ///     Validation::Failure(failures) => assert_eq!(failures.len(), 2),
    ///     Validation::Success(_) => unreachable!(),
    /// }
    /// ```
    pub fn validate<'a>(&self, json: &'a Value) -> Validation<&'a Value, FailedDecodes> {
        if self.check_shape(json).is_err() {
            let failure = match self.root {
                Rule::Schema(_) => Failure::new(Some(json), FailureType::Object),
                Rule::Validator(_) => {
                    Failure::new(Some(json), FailureType::Unknown).with_wrapper(Wrapper::Array)
                }
            };
            let failure = FailedDecode::from_failure(failure, "");
            return Validation::Failure(FailedDecodes::single(failure));
        }

        match FailedDecodes::from_vec(get_failed_decodes(&self.root, json)) {
            Some(failures) => {
                tracing::debug!(count = failures.len(), "validation failed");
                Validation::Failure(failures)
            }
            None => Validation::Success(json),
        }
    }

    fn check_shape(&self, json: &Value) -> Result<(), DecodeError> {
        let (ok, expected) = match self.root {
            Rule::Schema(_) => (predicates::is_object(Some(json)), "an object"),
            Rule::Validator(_) => (predicates::is_array(Some(json)), "an array"),
        };
        if ok {
            Ok(())
        } else {
            Err(DecodeError::Shape {
                expected,
                got: format_json(Some(json)),
            })
        }
    }
}

/// Binds a schema to a decoder; see [`Decoder::new`].
pub fn create_decoder(root: impl Into<Rule>) -> Result<Decoder, SchemaError> {
    Decoder::new(root)
}

fn check_construction(rule: &Rule, path: &str) -> Result<(), SchemaError> {
    match rule {
        Rule::Schema(schema) => {
            for (key, rule) in schema.fields() {
                check_construction(rule, &PathSegment::field(key).under(path))?;
            }
            Ok(())
        }
        Rule::Validator(validator) => {
            if let Some((wrapper, expected)) = validator.misuse() {
                let failure = Failure::new(None, expected).with_wrapper(wrapper);
                let record = FailedDecode::from_failure(failure, path);
                return Err(SchemaError::Misuse {
                    path: path.to_string(),
                    message: record.message(),
                });
            }
            for (index, rule) in validator.rules().iter().enumerate() {
                let nested = match validator.kind() {
                    ValidatorKind::Tuple => PathSegment::index(index).under(path),
                    _ => path.to_string(),
                };
                check_construction(rule, &nested)?;
            }
            Ok(())
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Decoder>();
    assert_sync::<Decoder>();
};
