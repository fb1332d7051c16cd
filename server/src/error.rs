//! Request failures and their HTTP mapping.
//!
//! A malformed request (missing or unparseable parameter) is 400; a
//! well-formed value the converter refuses is 422.

use std::fmt;

use axum::extract::rejection::QueryRejection;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use numeral_core::ConversionError;
use thiserror::Error;

use crate::types::ErrorBody;

/// Which side of the conversion a rejected value was on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Numeral {
    Arabic,
    Roman,
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeral::Arabic => f.write_str("arabic number"),
            Numeral::Roman => f.write_str("roman numeral"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required parameter `{param}`")]
    MissingParameter {
        param: &'static str,
        example: &'static str,
    },

    #[error("missing parameter, use `roman` or `arabic`")]
    NoConversionRequested,

    #[error("invalid query string: {0}")]
    MalformedQuery(String),

    #[error("parameter `{param}` must be a number")]
    NotANumber { param: &'static str, input: String },

    #[error("invalid {numeral}")]
    Conversion {
        numeral: Numeral,
        input: String,
        source: ConversionError,
    },

    #[error("method not allowed, use GET")]
    MethodNotAllowed { method: Method },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter { .. }
            | ApiError::NoConversionRequested
            | ApiError::MalformedQuery(_)
            | ApiError::NotANumber { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conversion { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = ErrorBody {
            error: self.to_string(),
            ..Default::default()
        };

        match self {
            ApiError::MissingParameter { example, .. } => {
                body.example = Some(example.to_string());
            }
            ApiError::NoConversionRequested => {
                body.example = Some("/api/index?roman=XIV".to_string());
            }
            ApiError::MalformedQuery(_) => {}
            ApiError::NotANumber { input, .. } => {
                body.input = Some(input);
            }
            ApiError::Conversion { input, source, .. } => {
                body.input = Some(input);
                body.details = Some(source.to_string());
                body.kind = Some(source.kind());
            }
            ApiError::MethodNotAllowed { method } => {
                body.method = Some(method.to_string());
                body.allowed = Some(vec![Method::GET.to_string()]);
                return (status, [(header::ALLOW, "GET, OPTIONS")], Json(body)).into_response();
            }
        }

        (status, Json(body)).into_response()
    }
}
