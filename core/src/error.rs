//! Error types for the numeral converter and its HTTP client.
//!
//! # Design
//! `ConversionError` is what the pure converter returns; each variant names
//! the offending input so callers can surface the message unchanged.
//! `ErrorKind` is the flat, serializable tag of a `ConversionError` and is
//! what travels in HTTP error bodies.
//!
//! `ApiError` covers the client side: `Rejected` is the service refusing a
//! value (422), everything else non-2xx lands in `HttpError` with the raw
//! status code and body for debugging.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ErrorBody;

/// Failures of the Arabic/Roman converter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("{value} is not a whole number")]
    NotInteger { value: f64 },

    /// `value` is the caller's number as written, including floats beyond
    /// the `i64` range.
    #[error("{value} is out of range; expected a number between 1 and 3999")]
    OutOfRange { value: String },

    #[error("roman numeral is empty")]
    EmptyInput,

    #[error("invalid character {character:?} in {input:?}; only I, V, X, L, C, D and M are allowed")]
    InvalidCharacter { input: String, character: char },

    #[error("{input:?} is not a canonical roman numeral; did you mean {canonical:?}?")]
    NonCanonicalForm { input: String, canonical: String },
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::NotInteger { .. } => ErrorKind::NotInteger,
            ConversionError::OutOfRange { .. } => ErrorKind::OutOfRange,
            ConversionError::EmptyInput => ErrorKind::EmptyInput,
            ConversionError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            ConversionError::NonCanonicalForm { .. } => ErrorKind::NonCanonicalForm,
        }
    }
}

/// Serializable tag identifying which conversion rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotInteger,
    OutOfRange,
    EmptyInput,
    InvalidCharacter,
    NonCanonicalForm,
}

impl ErrorKind {
    /// The wire name, identical to the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotInteger => "not_integer",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::InvalidCharacter => "invalid_character",
            ErrorKind::NonCanonicalForm => "non_canonical_form",
        }
    }
}

/// Errors returned by `ConverterClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service returned 422: the value was well-formed but not convertible.
    #[error("rejected by server: {}", .0.error)]
    Rejected(ErrorBody),

    /// The server returned a non-2xx status other than 422.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// A required response header was absent.
    #[error("missing response header {0}")]
    MissingHeader(&'static str),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}
