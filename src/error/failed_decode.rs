//! Flattened failure records.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;

use crate::format::format_failed_decode;
use crate::schema::{Failure, FailureType, Wrapper};

/// A single validation failure located by an absolute path.
///
/// Produced by the decode engine; [`Display`] renders the human-readable
/// message through the formatter's decision table.
///
/// # Example
///
/// ```rust
/// use shapecheck::{get_failed_decodes, string, FailureType, Schema};
/// use serde_json::json;
///
/// let schema = Schema::new().field("name", string());
/// let failures = get_failed_decodes(&schema.into(), &json!({}));
///
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].path, "name");
/// assert_eq!(failures[0].expected_type, FailureType::String);
/// assert_eq!(failures[0].to_string(), "Expected string but got undefined at name");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FailedDecode {
    /// The offending value, `None` if the field was absent.
    pub actual: Option<Value>,
    /// What was expected at this location.
    pub expected_type: FailureType,
    /// The expected value, for literal failures and tuple length mismatches.
    pub expected_value: Option<Value>,
    /// Absolute path from the decoded root, e.g. `items[2].name`.
    pub path: String,
    /// The combinator responsible for the failure, if any.
    pub wrapper: Option<Wrapper>,
}

impl FailedDecode {
    /// Creates a record for a nested object that was missing or not an object.
    pub(crate) fn not_an_object(actual: Option<&Value>, path: impl Into<String>) -> Self {
        Self {
            actual: actual.cloned(),
            expected_type: FailureType::Object,
            expected_value: None,
            path: path.into(),
            wrapper: None,
        }
    }

    /// Flattens a validator failure, replacing its relative path with `path`.
    pub(crate) fn from_failure(failure: Failure, path: impl Into<String>) -> Self {
        Self {
            actual: failure.value,
            expected_type: failure.expected,
            expected_value: failure.literal,
            path: path.into(),
            wrapper: failure.wrapper,
        }
    }

    /// Returns the formatted, human-readable message for this failure.
    pub fn message(&self) -> String {
        format_failed_decode(self)
    }
}

impl From<FailedDecode> for Failure {
    fn from(decode: FailedDecode) -> Self {
        Failure {
            value: decode.actual,
            expected: decode.expected_type,
            wrapper: decode.wrapper,
            path: Some(decode.path).filter(|path| !path.is_empty()),
            literal: decode.expected_value,
        }
    }
}

impl Display for FailedDecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// A non-empty collection of failure records.
///
/// Returned by [`Decoder::validate`](crate::Decoder::validate) when a caller
/// needs every failure rather than just the first. Collections combine via
/// [`Semigroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct FailedDecodes(NonEmptyVec<FailedDecode>);

impl FailedDecodes {
    /// Creates a collection containing a single failure.
    pub fn single(failure: FailedDecode) -> Self {
        Self(NonEmptyVec::singleton(failure))
    }

    /// Creates a collection from a vec, or `None` if the vec is empty.
    pub fn from_vec(failures: Vec<FailedDecode>) -> Option<Self> {
        NonEmptyVec::from_vec(failures).map(Self)
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first failure in schema order.
    pub fn first(&self) -> &FailedDecode {
        self.0.head()
    }

    /// Iterates over the failures in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &FailedDecode> {
        self.0.iter()
    }

    /// Returns all failures at the given path.
    pub fn at_path(&self, path: &str) -> Vec<&FailedDecode> {
        self.0.iter().filter(|f| f.path == path).collect()
    }

    /// Converts this collection into a `Vec<FailedDecode>`.
    pub fn into_vec(self) -> Vec<FailedDecode> {
        self.0.into_vec()
    }
}

impl Semigroup for FailedDecodes {
    fn combine(self, other: Self) -> Self {
        FailedDecodes(self.0.combine(other.0))
    }
}

impl Display for FailedDecodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decoding failed with {} error(s):", self.len())?;
        for (i, failure) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl IntoIterator for FailedDecodes {
    type Item = FailedDecode;
    type IntoIter = std::vec::IntoIter<FailedDecode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
