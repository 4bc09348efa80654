//! Error types for the datatype converter

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers.
///
/// Malformed field data is never an error: conversions return `None` and log instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported FHIR type: {0}")]
    UnsupportedType(String),
}

/// Failure of the native V2 timestamp parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Empty timestamp")]
    Empty,

    #[error("Malformed timestamp {value}: {reason}")]
    Malformed { value: String, reason: &'static str },

    #[error("Timestamp {0} is not a valid calendar date or time")]
    OutOfRange(String),
}

impl TimestampError {
    pub(crate) fn malformed(value: &str, reason: &'static str) -> Self {
        Self::Malformed {
            value: value.to_string(),
            reason,
        }
    }
}
