//! HTTP service exposing the Roman numeral converter.
//!
//! Routes are read-only: every path answers `GET`, treats `OPTIONS` as a CORS
//! preflight and turns any other method into a JSON 405. CORS headers are set
//! on every response, errors included.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod types;

use axum::handler::Handler;
use axum::http::{header, HeaderValue};
use axum::routing::{get, MethodRouter};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use types::{ArabicResponse, Direction, ErrorBody, HealthResponse, IndexResponse, RomanResponse};

pub fn app() -> Router {
    Router::new()
        .route("/api/a2r", read_only(handlers::arabic_to_roman))
        .route("/api/r2a", read_only(handlers::roman_to_arabic))
        .route("/api/index", read_only(handlers::convert))
        .route("/health", read_only(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn read_only<H, T>(handler: H) -> MethodRouter
where
    H: Handler<T, ()>,
    T: 'static,
{
    get(handler)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed)
}
