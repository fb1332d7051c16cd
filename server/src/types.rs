//! JSON bodies sent by the server.

use numeral_core::ErrorKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ArabicQuery {
    pub arabic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RomanQuery {
    pub roman: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub roman: Option<String>,
    pub arabic: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RomanResponse {
    pub roman: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArabicResponse {
    pub arabic: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    RomanToArabic,
    ArabicToRoman,
}

/// Body of `GET /api/index`. `input` is the normalized numeral or the
/// parsed number; `result` is the other side of the conversion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub input: serde_json::Value,
    pub result: serde_json::Value,
    #[serde(rename = "type")]
    pub direction: Direction,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of every 4xx response.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}
