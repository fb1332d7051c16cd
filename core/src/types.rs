//! Wire DTOs for the numeral conversion API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! of the server crate, so the client never links axum. Integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;
use crate::numeral::RomanNumeral;

/// Successful body of `GET /api/a2r`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanResponse {
    pub roman: RomanNumeral,
}

/// Successful body of `GET /api/r2a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArabicResponse {
    pub arabic: u16,
}

/// JSON body the server sends with every 4xx response. Only `error` is
/// always present; the rest depends on what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// CORS headers advertised by a preflight response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_origin: String,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
}
