use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::{Method, StatusCode};
use axum::Json;
use serde_json::json;

use crate::error::{ApiError, Numeral};
use crate::types::{
    ArabicQuery, ArabicResponse, Direction, HealthResponse, IndexQuery, IndexResponse,
    RomanQuery, RomanResponse,
};

pub async fn arabic_to_roman(
    query: Result<Query<ArabicQuery>, QueryRejection>,
) -> Result<Json<RomanResponse>, ApiError> {
    let Query(query) = query?;
    let raw = required(query.arabic).ok_or(ApiError::MissingParameter {
        param: "arabic",
        example: "/api/a2r?arabic=14",
    })?;
    let (_, roman) = convert_arabic(&raw)?;
    Ok(Json(RomanResponse { roman }))
}

pub async fn roman_to_arabic(
    query: Result<Query<RomanQuery>, QueryRejection>,
) -> Result<Json<ArabicResponse>, ApiError> {
    let Query(query) = query?;
    let roman = required(query.roman).ok_or(ApiError::MissingParameter {
        param: "roman",
        example: "/api/r2a?roman=XIV",
    })?;
    let arabic = convert_roman(&roman)?;
    Ok(Json(ArabicResponse { arabic }))
}

/// Combined endpoint: `roman` wins when both parameters are present.
pub async fn convert(
    query: Result<Query<IndexQuery>, QueryRejection>,
) -> Result<Json<IndexResponse>, ApiError> {
    let Query(query) = query?;

    if let Some(roman) = required(query.roman) {
        let arabic = convert_roman(&roman)?;
        return Ok(Json(IndexResponse {
            input: json!(roman.trim().to_ascii_uppercase()),
            result: json!(arabic),
            direction: Direction::RomanToArabic,
        }));
    }

    if let Some(raw) = required(query.arabic) {
        let (arabic, roman) = convert_arabic(&raw)?;
        return Ok(Json(IndexResponse {
            input: json!(arabic),
            result: json!(roman),
            direction: Direction::ArabicToRoman,
        }));
    }

    Err(ApiError::NoConversionRequested)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// CORS preflight. The headers come from the router's response layers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed(method: Method) -> ApiError {
    tracing::debug!(%method, "rejected non-read method");
    ApiError::MethodNotAllowed { method }
}

/// An absent or empty parameter counts as missing.
fn required(param: Option<String>) -> Option<String> {
    param.filter(|value| !value.is_empty())
}

/// Parse `raw` as a number and convert it. Integers go straight to the
/// converter; decimals and exponent forms such as `1e3` are handed over as
/// floats so the converter decides whether they are whole.
fn convert_arabic(raw: &str) -> Result<(i64, String), ApiError> {
    let trimmed = raw.trim();
    let result = match trimmed.parse::<i64>() {
        Ok(whole) => numeral_core::arabic_to_roman(whole).map(|roman| (whole, roman)),
        Err(_) => match trimmed.parse::<f64>() {
            // A successful conversion means the float is a whole number in
            // 1..=3999, so the cast is exact.
            Ok(value) if value.is_finite() => {
                numeral_core::arabic_to_roman(value).map(|roman| (value as i64, roman))
            }
            _ => {
                tracing::debug!(input = raw, "arabic parameter is not a number");
                return Err(ApiError::NotANumber {
                    param: "arabic",
                    input: raw.to_string(),
                });
            }
        },
    };

    match result {
        Ok((arabic, roman)) => {
            tracing::info!(arabic, roman = %roman, "converted arabic to roman");
            Ok((arabic, roman))
        }
        Err(source) => {
            tracing::warn!(
                input = raw,
                kind = source.kind().as_str(),
                error = %source,
                "rejected arabic number"
            );
            Err(ApiError::Conversion {
                numeral: Numeral::Arabic,
                input: raw.to_string(),
                source,
            })
        }
    }
}

fn convert_roman(roman: &str) -> Result<u16, ApiError> {
    match numeral_core::roman_to_arabic(roman) {
        Ok(arabic) => {
            tracing::info!(roman, arabic, "converted roman to arabic");
            Ok(arabic)
        }
        Err(source) => {
            tracing::warn!(
                input = roman,
                kind = source.kind().as_str(),
                error = %source,
                "rejected roman numeral"
            );
            Err(ApiError::Conversion {
                numeral: Numeral::Roman,
                input: roman.to_string(),
                source,
            })
        }
    }
}
