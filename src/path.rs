//! Failure path construction.
//!
//! Paths are assembled bottom-up: the deepest validator reports a path
//! relative to itself, and each enclosing layer prepends its own key or index
//! as the failure bubbles up. The resulting strings look like
//! `items[2].name` or `matrix[1][0]`.

use std::fmt::{self, Display};

/// A single step into a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object field (e.g. `user`, `email`)
    Field(String),
    /// An array position (e.g. `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Prepends this segment to a path fragment reported by a nested validator.
    ///
    /// - no inner path: the segment alone (`name`, `[3]`)
    /// - inner path starting with `[`: joined directly (`items[0]`)
    /// - otherwise: joined with a dot (`items.name`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::PathSegment;
    ///
    /// assert_eq!(PathSegment::field("items").nest(Some("[0]")), "items[0]");
    /// assert_eq!(PathSegment::index(2).nest(Some("name")), "[2].name");
    /// assert_eq!(PathSegment::field("name").nest(None), "name");
    /// ```
    pub fn nest(&self, inner: Option<&str>) -> String {
        match inner {
            None => self.to_string(),
            Some(inner) if inner.starts_with('[') => format!("{}{}", self, inner),
            Some(inner) => format!("{}.{}", self, inner),
        }
    }

    /// Appends this segment to an absolute parent path, top-down.
    ///
    /// An empty parent denotes the root.
    pub(crate) fn under(&self, parent: &str) -> String {
        match self {
            _ if parent.is_empty() => self.to_string(),
            PathSegment::Index(_) => format!("{}{}", parent, self),
            PathSegment::Field(_) => format!("{}.{}", parent, self),
        }
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Prefixes every path of a nested object's failures with the owning field.
///
/// Nested object failures are always dot-joined, even when the inner path
/// happens to start with a bracket.
pub(crate) fn qualify(key: &str, inner: &str) -> String {
    format!("{}.{}", key, inner)
}
