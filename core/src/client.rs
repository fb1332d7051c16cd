//! Stateless HTTP request builder and response parser for the conversion API.
//!
//! # Design
//! `ConverterClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::numeral::RomanNumeral;
use crate::types::{ArabicResponse, CorsPolicy, ErrorBody, RomanResponse};

/// Routes exposed by the conversion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ArabicToRoman,
    RomanToArabic,
    Index,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ArabicToRoman => "/api/a2r",
            Endpoint::RomanToArabic => "/api/r2a",
            Endpoint::Index => "/api/index",
        }
    }
}

/// Synchronous, stateless client for the conversion API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ConverterClient {
    base_url: String,
}

impl ConverterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_arabic_to_roman(&self, value: i64) -> HttpRequest {
        self.get(Endpoint::ArabicToRoman, "arabic", &value.to_string())
    }

    pub fn build_roman_to_arabic(&self, roman: &str) -> HttpRequest {
        self.get(Endpoint::RomanToArabic, "roman", roman)
    }

    pub fn build_preflight(&self, endpoint: Endpoint) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Options,
            url: format!("{}{}", self.base_url, endpoint.path()),
            headers: vec![(
                "access-control-request-method".to_string(),
                HttpMethod::Get.as_str().to_string(),
            )],
        }
    }

    /// The numeral in the body is re-validated, so a server returning a
    /// non-canonical spelling surfaces as `DeserializationError`.
    pub fn parse_arabic_to_roman(&self, response: HttpResponse) -> Result<RomanNumeral, ApiError> {
        check_status(&response, 200)?;
        let body: RomanResponse = decode(&response.body)?;
        Ok(body.roman)
    }

    pub fn parse_roman_to_arabic(&self, response: HttpResponse) -> Result<u16, ApiError> {
        check_status(&response, 200)?;
        let body: ArabicResponse = decode(&response.body)?;
        Ok(body.arabic)
    }

    pub fn parse_preflight(&self, response: HttpResponse) -> Result<CorsPolicy, ApiError> {
        check_status(&response, 200)?;
        let allow_origin = response
            .header("access-control-allow-origin")
            .ok_or(ApiError::MissingHeader("access-control-allow-origin"))?
            .to_string();
        Ok(CorsPolicy {
            allow_origin,
            allow_methods: split_list(response.header("access-control-allow-methods")),
            allow_headers: split_list(response.header("access-control-allow-headers")),
        })
    }

    fn get(&self, endpoint: Endpoint, param: &str, value: &str) -> HttpRequest {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(param, value)
            .finish();
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{}?{query}", self.base_url, endpoint.path()),
            headers: Vec::new(),
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 422 {
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&response.body) {
            return Err(ApiError::Rejected(body));
        }
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
