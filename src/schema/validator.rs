//! The validator type and its result shape.
//!
//! A [`Validator`] is a pure, shareable function from an optional JSON value
//! to a [`ValidationResult`]. Failures carry a [`FailureType`] from a closed
//! taxonomy plus an optional [`Wrapper`] naming the combinator that produced
//! or rewrote them, which is what the formatter keys its messages on.

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use super::Rule;

/// Outcome of running one validator: `Success(())` or a [`Failure`].
pub type ValidationResult = Validation<(), Failure>;

/// What a failing validator expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureType {
    Boolean,
    Literal,
    /// No acceptable shape exists for the value (empty-array and union
    /// failures, tuple length mismatches).
    None,
    Null,
    Number,
    Object,
    String,
    /// The container itself had the wrong kind, or a union was misbuilt.
    Unknown,
    /// The validator itself is misconfigured.
    Validator,
}

impl Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureType::Boolean => "boolean",
            FailureType::Literal => "literal",
            FailureType::None => "none",
            FailureType::Null => "null",
            FailureType::Number => "number",
            FailureType::Object => "object",
            FailureType::String => "string",
            FailureType::Unknown => "unknown",
            FailureType::Validator => "validator",
        };
        f.write_str(name)
    }
}

/// The combinator that produced or rewrote a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrapper {
    Array,
    Optional,
    Tuple,
    Union,
}

impl Display for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Wrapper::Array => "array",
            Wrapper::Optional => "optional",
            Wrapper::Tuple => "tuple",
            Wrapper::Union => "union",
        };
        f.write_str(name)
    }
}

/// A failed validation, relative to the validator that produced it.
///
/// `path` is the fragment contributed by nested validators (e.g. `[2].name`)
/// and is `None` at leaves. `value` is `None` when the checked field was
/// absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// The offending value.
    pub value: Option<Value>,
    /// What was expected instead.
    pub expected: FailureType,
    /// The combinator responsible for the failure, if any.
    pub wrapper: Option<Wrapper>,
    /// Path relative to the validator that reported the failure.
    pub path: Option<String>,
    /// The expected value for literal failures and tuple length mismatches.
    pub literal: Option<Value>,
}

impl Failure {
    /// Creates a leaf failure with no wrapper, path or expected value.
    pub fn new(value: Option<&Value>, expected: FailureType) -> Self {
        Self {
            value: value.cloned(),
            expected,
            wrapper: None,
            path: None,
            literal: None,
        }
    }

    /// Sets the wrapper and returns self for chaining.
    pub fn with_wrapper(mut self, wrapper: Wrapper) -> Self {
        self.wrapper = Some(wrapper);
        self
    }

    /// Sets the relative path and returns self for chaining.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the expected value and returns self for chaining.
    pub fn with_literal(mut self, literal: Value) -> Self {
        self.literal = Some(literal);
        self
    }

    /// Returns true when the failure reports a misbuilt validator rather
    /// than a data mismatch.
    pub fn is_misuse(&self) -> bool {
        matches!(
            (self.wrapper, self.expected),
            (_, FailureType::Validator) | (Some(Wrapper::Union), FailureType::Unknown)
        )
    }
}

/// The family a validator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    String,
    Number,
    Boolean,
    Nil,
    Array,
    Tuple,
    Union,
    Optional,
    Literal,
    Custom,
}

impl Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidatorKind::String => "string",
            ValidatorKind::Number => "number",
            ValidatorKind::Boolean => "boolean",
            ValidatorKind::Nil => "nil",
            ValidatorKind::Array => "array",
            ValidatorKind::Tuple => "tuple",
            ValidatorKind::Union => "union",
            ValidatorKind::Optional => "optional",
            ValidatorKind::Literal => "literal",
            ValidatorKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Type alias for the check function stored in a validator.
pub(crate) type CheckFn = Arc<dyn Fn(Option<&Value>) -> ValidationResult + Send + Sync>;

/// A reusable, stateless structural check.
///
/// Validators are created by the factory functions ([`string`](crate::string),
/// [`array`](crate::array), [`union`](crate::union), ...) and are cheap to
/// clone; clones share the same underlying check.
///
/// # Example
///
/// ```rust
/// use shapecheck::{number, string, union};
/// use serde_json::json;
///
/// let id = union([string(), number()]);
///
/// assert!(id.validate(Some(&json!("abc"))).is_success());
/// assert!(id.validate(Some(&json!(42))).is_success());
/// assert!(id.validate(Some(&json!(true))).is_failure());
/// ```
#[derive(Clone)]
pub struct Validator {
    kind: ValidatorKind,
    rules: Arc<[Rule]>,
    misuse: Option<(Wrapper, FailureType)>,
    check: CheckFn,
}

impl Validator {
    pub(crate) fn new<F>(kind: ValidatorKind, check: F) -> Self
    where
        F: Fn(Option<&Value>) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            kind,
            rules: Arc::from(Vec::new()),
            misuse: None,
            check: Arc::new(check),
        }
    }

    /// Records the nested rules so schema binding can walk into them.
    pub(crate) fn with_rules(mut self, rules: Arc<[Rule]>) -> Self {
        self.rules = rules;
        self
    }

    /// Marks this validator as misbuilt.
    ///
    /// The check itself still reports the misuse lazily when run; binding a
    /// schema that contains it fails eagerly.
    pub(crate) fn with_misuse(mut self, wrapper: Wrapper, expected: FailureType) -> Self {
        self.misuse = Some((wrapper, expected));
        self
    }

    /// Creates a validator from an arbitrary check function.
    ///
    /// The function must be pure. Returning a failure of type
    /// [`FailureType::Validator`] signals that the validator itself is
    /// misconfigured, which the formatter reports with usage guidance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{Failure, FailureType, Validator};
    /// use serde_json::Value;
    /// use stillwater::Validation;
    ///
    /// let even = Validator::custom(|value| match value.and_then(Value::as_i64) {
    ///     Some(n) if n % 2 == 0 => Validation::Success(()),
    ///     _ => Validation::Failure(Failure::new(value, FailureType::Number)),
    /// });
    /// ```
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>) -> ValidationResult + Send + Sync + 'static,
    {
        Self::new(ValidatorKind::Custom, check)
    }

    /// Runs the check against a value; `None` means the value is absent.
    pub fn validate(&self, value: Option<&Value>) -> ValidationResult {
        (self.check)(value)
    }

    /// Returns the validator family.
    pub fn kind(&self) -> ValidatorKind {
        self.kind
    }

    /// Returns the rules this validator delegates to, in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub(crate) fn misuse(&self) -> Option<(Wrapper, FailureType)> {
        self.misuse
    }
}

impl Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("kind", &self.kind)
            .field("rules", &self.rules)
            .finish()
    }
}

// Validators are shared across threads behind Arc; keep that true.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};
