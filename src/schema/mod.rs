//! Schema trees and the validators that make up their leaves.
//!
//! A schema is a tree whose interior nodes are [`Schema`] mappings from field
//! name to [`Rule`], and whose leaves are [`Validator`]s. The shape of the
//! tree mirrors the expected shape of the JSON value one level at a time.
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{array, number, optional, string, Schema};
//!
//! let user = Schema::new()
//!     .field("name", string())
//!     .field("tags", array(string()))
//!     .field("address", Schema::new()
//!         .field("city", string())
//!         .field("zip", optional(number())));
//!
//! assert_eq!(user.len(), 3);
//! ```

mod array;
mod combinators;
mod literal;
mod primitive;
mod validator;

use indexmap::IndexMap;

pub use array::{array, empty_array};
pub use combinators::{optional, tuple, union};
pub use literal::literal;
pub use primitive::{boolean, nil, number, string};
pub use validator::{Failure, FailureType, ValidationResult, Validator, ValidatorKind, Wrapper};

/// One node of a schema tree: either a leaf validator or a nested schema.
#[derive(Debug, Clone)]
pub enum Rule {
    /// A leaf check applied to the field's value.
    Validator(Validator),
    /// A nested object whose fields are checked recursively.
    Schema(Schema),
}

impl From<Validator> for Rule {
    fn from(validator: Validator) -> Self {
        Rule::Validator(validator)
    }
}

impl From<Schema> for Rule {
    fn from(schema: Schema) -> Self {
        Rule::Schema(schema)
    }
}

/// An object-shaped schema: an ordered mapping from field name to [`Rule`].
///
/// Fields are checked in the order they were declared. Schemas are immutable
/// once built and can be reused across any number of decode calls.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, Rule>,
}

impl Schema {
    /// Creates a schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and returns self for chaining.
    ///
    /// Re-declaring a field replaces its rule but keeps its original position.
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.fields.insert(name.into(), rule.into());
        self
    }

    /// Returns the rule declared for a field.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.fields.get(name)
    }

    /// Iterates over the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
