//! Error and failure-record types.
//!
//! [`FailedDecode`] is one flattened validation failure with an absolute path;
//! [`FailedDecodes`] is a non-empty collection of them. [`SchemaError`] and
//! [`DecodeError`] are the errors returned by decoder construction and by a
//! decode call respectively.

mod decode_error;
mod failed_decode;

pub use decode_error::{DecodeError, SchemaError};
pub use failed_decode::{FailedDecode, FailedDecodes};
