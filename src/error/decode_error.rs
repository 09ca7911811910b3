//! Errors returned by decoder construction and decoding.

use thiserror::Error;

use crate::schema::ValidatorKind;

use super::FailedDecode;

/// A schema that cannot be bound to a decoder.
///
/// Detected once, eagerly, by [`create_decoder`](crate::create_decoder)
/// before any data is processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The root of the schema is a validator other than an array validator.
    #[error("Expected schema to be an object or an array validator but got {kind} validator")]
    InvalidRoot {
        /// The family of the offending root validator.
        kind: ValidatorKind,
    },

    /// A combinator somewhere in the schema was built with the wrong arity.
    #[error("Invalid validator at {path}\n{message}")]
    Misuse {
        /// Dotted path to the field holding the misbuilt combinator.
        path: String,
        /// Usage guidance for the misbuilt combinator.
        message: String,
    },
}

/// A decode call that rejected its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The input is not shaped like the schema's root at all.
    #[error("Expected json to be {expected} but got {got}")]
    Shape {
        /// `"an object"` or `"an array"`.
        expected: &'static str,
        /// The input, serialized as JSON.
        got: String,
    },

    /// The input failed validation; carries the first failure in schema order.
    #[error("{message}")]
    Failed {
        /// The formatted message of `failure`.
        message: String,
        /// The first failure record.
        failure: FailedDecode,
    },
}

impl DecodeError {
    /// Returns the failure record, if this error came from a field mismatch.
    pub fn failure(&self) -> Option<&FailedDecode> {
        match self {
            DecodeError::Failed { failure, .. } => Some(failure),
            DecodeError::Shape { .. } => None,
        }
    }
}

impl From<FailedDecode> for DecodeError {
    fn from(failure: FailedDecode) -> Self {
        DecodeError::Failed {
            message: failure.message(),
            failure,
        }
    }
}

// Errors cross thread boundaries in callers; keep them Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaError>();
    assert_sync::<SchemaError>();
    assert_send::<DecodeError>();
    assert_sync::<DecodeError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FailureType;
    use serde_json::json;

    #[test]
    fn test_invalid_root_display() {
        let error = SchemaError::InvalidRoot {
            kind: ValidatorKind::String,
        };
        assert_eq!(
            error.to_string(),
            "Expected schema to be an object or an array validator but got string validator"
        );
    }

    #[test]
    fn test_misuse_display() {
        let error = SchemaError::Misuse {
            path: "a.b".to_string(),
            message: "guidance".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid validator at a.b\nguidance");
    }

    #[test]
    fn test_shape_display() {
        let error = DecodeError::Shape {
            expected: "an object",
            got: "\"wow\"".to_string(),
        };
        assert_eq!(error.to_string(), "Expected json to be an object but got \"wow\"");
        assert!(error.failure().is_none());
    }

    #[test]
    fn test_failed_from_record() {
        let failure = FailedDecode {
            actual: Some(json!("67Kg")),
            expected_type: FailureType::Number,
            expected_value: None,
            path: "weight".to_string(),
            wrapper: None,
        };
        let error = DecodeError::from(failure.clone());

        assert_eq!(error.to_string(), "Expected number but got \"67Kg\" at weight");
        assert_eq!(error.failure(), Some(&failure));
    }
}
