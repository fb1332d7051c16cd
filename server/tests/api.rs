use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use numeral_server::{app, ArabicResponse, Direction, ErrorBody, IndexResponse, RomanResponse};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- /api/a2r ---

#[tokio::test]
async fn a2r_converts_valid_number() {
    let resp = app().oneshot(get("/api/a2r?arabic=14")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: RomanResponse = body_json(resp).await;
    assert_eq!(body.roman, "XIV");
}

#[tokio::test]
async fn a2r_handles_boundaries_and_subtractive_pairs() {
    for (arabic, roman) in [
        (1, "I"),
        (4, "IV"),
        (9, "IX"),
        (40, "XL"),
        (1999, "MCMXCIX"),
        (3999, "MMMCMXCIX"),
    ] {
        let resp = app()
            .oneshot(get(&format!("/api/a2r?arabic={arabic}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{arabic}");
        let body: RomanResponse = body_json(resp).await;
        assert_eq!(body.roman, roman);
    }
}

#[tokio::test]
async fn a2r_missing_parameter_returns_400() {
    let resp = app().oneshot(get("/api/a2r")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.example.as_deref(), Some("/api/a2r?arabic=14"));
}

#[tokio::test]
async fn a2r_empty_parameter_returns_400() {
    let resp = app().oneshot(get("/api/a2r?arabic=")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn a2r_non_numeric_returns_400() {
    let resp = app().oneshot(get("/api/a2r?arabic=abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.input.as_deref(), Some("abc"));
    assert!(body.kind.is_none());
}

#[tokio::test]
async fn a2r_out_of_range_returns_422() {
    for arabic in ["0", "-1", "4000", "10000"] {
        let resp = app()
            .oneshot(get(&format!("/api/a2r?arabic={arabic}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{arabic}");
        let body: ErrorBody = body_json(resp).await;
        assert_eq!(body.kind, Some(numeral_core::ErrorKind::OutOfRange));
        assert_eq!(body.input.as_deref(), Some(arabic));
        assert!(body.details.is_some());
    }
}

#[tokio::test]
async fn a2r_decimal_returns_422() {
    let resp = app().oneshot(get("/api/a2r?arabic=3.14")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.kind, Some(numeral_core::ErrorKind::NotInteger));
}

#[tokio::test]
async fn a2r_accepts_scientific_notation() {
    let resp = app().oneshot(get("/api/a2r?arabic=1e3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: RomanResponse = body_json(resp).await;
    assert_eq!(body.roman, "M");
}

#[tokio::test]
async fn a2r_huge_float_details_name_the_value() {
    let resp = app().oneshot(get("/api/a2r?arabic=1e20")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.kind, Some(numeral_core::ErrorKind::OutOfRange));
    assert_eq!(body.input.as_deref(), Some("1e20"));
    let details = body.details.unwrap();
    assert!(details.starts_with("100000000000000000000 "), "{details}");
    assert!(!details.contains(&i64::MAX.to_string()), "{details}");
}

#[tokio::test]
async fn a2r_repeated_parameter_returns_400() {
    let resp = app()
        .oneshot(get("/api/a2r?arabic=1&arabic=2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- /api/r2a ---

#[tokio::test]
async fn r2a_converts_valid_numeral() {
    let resp = app().oneshot(get("/api/r2a?roman=MCMXCIX")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ArabicResponse = body_json(resp).await;
    assert_eq!(body.arabic, 1999);
}

#[tokio::test]
async fn r2a_accepts_lowercase() {
    let resp = app().oneshot(get("/api/r2a?roman=xiv")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ArabicResponse = body_json(resp).await;
    assert_eq!(body.arabic, 14);
}

#[tokio::test]
async fn r2a_missing_parameter_returns_400() {
    let resp = app().oneshot(get("/api/r2a")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "missing required parameter `roman`");
}

#[tokio::test]
async fn r2a_invalid_input_returns_422() {
    for (roman, kind) in [
        ("ABC", numeral_core::ErrorKind::InvalidCharacter),
        ("IV5", numeral_core::ErrorKind::InvalidCharacter),
        ("IIII", numeral_core::ErrorKind::NonCanonicalForm),
        ("VV", numeral_core::ErrorKind::NonCanonicalForm),
        ("XXXX", numeral_core::ErrorKind::NonCanonicalForm),
        ("%20%20", numeral_core::ErrorKind::EmptyInput),
    ] {
        let resp = app()
            .oneshot(get(&format!("/api/r2a?roman={roman}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{roman}");
        let body: ErrorBody = body_json(resp).await;
        assert_eq!(body.error, "invalid roman numeral");
        assert_eq!(body.kind, Some(kind), "{roman}");
    }
}

// --- /api/index ---

#[tokio::test]
async fn index_converts_roman() {
    let resp = app().oneshot(get("/api/index?roman=xiv")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: IndexResponse = body_json(resp).await;
    assert_eq!(body.input, "XIV");
    assert_eq!(body.result, 14);
    assert_eq!(body.direction, Direction::RomanToArabic);
}

#[tokio::test]
async fn index_converts_arabic() {
    let resp = app().oneshot(get("/api/index?arabic=2024")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: IndexResponse = body_json(resp).await;
    assert_eq!(body.input, 2024);
    assert_eq!(body.result, "MMXXIV");
    assert_eq!(body.direction, Direction::ArabicToRoman);
}

#[tokio::test]
async fn index_prefers_roman_when_both_present() {
    let resp = app()
        .oneshot(get("/api/index?roman=X&arabic=5"))
        .await
        .unwrap();

    let body: IndexResponse = body_json(resp).await;
    assert_eq!(body.direction, Direction::RomanToArabic);
    assert_eq!(body.result, 10);
}

#[tokio::test]
async fn index_without_parameters_returns_400() {
    let resp = app().oneshot(get("/api/index")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.example.as_deref(), Some("/api/index?roman=XIV"));
}

#[tokio::test]
async fn index_rejection_returns_422() {
    let resp = app().oneshot(get("/api/index?arabic=0")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- methods and CORS ---

#[tokio::test]
async fn non_read_methods_return_405() {
    for method in ["POST", "PUT", "PATCH", "DELETE"] {
        let resp = app()
            .oneshot(request(method, "/api/r2a?roman=XIV"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(resp.headers()[http::header::ALLOW], "GET, OPTIONS");
        let body: ErrorBody = body_json(resp).await;
        assert_eq!(body.method.as_deref(), Some(method));
        assert_eq!(body.allowed, Some(vec!["GET".to_string()]));
    }
}

#[tokio::test]
async fn preflight_returns_200_with_empty_body() {
    let resp = app().oneshot(request("OPTIONS", "/api/a2r")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, OPTIONS"
    );
    assert_eq!(
        resp.headers()[http::header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type"
    );
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn cors_headers_on_success_and_error() {
    for uri in ["/api/a2r?arabic=14", "/api/a2r?arabic=0", "/api/r2a", "/health"] {
        let resp = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(
            resp.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*",
            "{uri}"
        );
        let methods = resp.headers()[http::header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(methods.contains("GET"), "{uri}");
    }
}

#[tokio::test]
async fn cors_headers_on_method_not_allowed() {
    let resp = app().oneshot(request("POST", "/api/a2r")).await.unwrap();
    assert_eq!(
        resp.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let resp = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: numeral_server::HealthResponse = body_json(resp).await;
    assert_eq!(body.status, "ok");
}
