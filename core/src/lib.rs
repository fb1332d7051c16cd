//! Roman numeral conversion core.
//!
//! # Overview
//! The `numeral` module is a pure converter between Arabic integers in
//! `1..=3999` and canonical Roman numerals. Around it sits a synchronous
//! client for the conversion service that builds `HttpRequest` values and
//! parses `HttpResponse` values without touching the network (host-does-IO
//! pattern).
//!
//! # Design
//! - The converter has no state and no I/O; failures are `ConversionError`
//!   values, never panics.
//! - `ConverterClient` is stateless; it holds only `base_url`.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod numeral;
pub mod types;

pub use client::{ConverterClient, Endpoint};
pub use error::{ApiError, ConversionError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use numeral::{
    arabic_to_roman, is_valid_arabic, is_valid_roman, roman_to_arabic, ArabicValue, RomanNumeral,
    MAX_ARABIC, MIN_ARABIC,
};
pub use types::{ArabicResponse, CorsPolicy, ErrorBody, RomanResponse};
