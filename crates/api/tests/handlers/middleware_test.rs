use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;

use salonbook_api::middleware::{
    auth::{is_admin, require_admin, ADMIN_TOKEN_HEADER},
    error_handling::AppError,
};
use salonbook_core::errors::BookingError;

use crate::test_utils::test_config;

fn headers_with_token(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_str(token).unwrap());
    headers
}

#[test]
fn test_app_error_status_mapping() {
    let cases = [
        (BookingError::NotFound("missing".to_string()), StatusCode::NOT_FOUND),
        (BookingError::Validation("bad".to_string()), StatusCode::BAD_REQUEST),
        (BookingError::Authentication("who".to_string()), StatusCode::UNAUTHORIZED),
        (BookingError::Authorization("denied".to_string()), StatusCode::FORBIDDEN),
        (
            BookingError::Database(eyre::eyre!("connection lost")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected_status) in cases {
        let response = AppError(error).into_response();
        assert_eq!(response.status(), expected_status);
    }
}

#[test]
fn test_require_admin_accepts_matching_token() {
    let config = test_config(Some("secret-token"));
    let headers = headers_with_token("secret-token");

    assert!(require_admin(&config, &headers).is_ok());
    assert!(is_admin(&config, &headers));
}

#[test]
fn test_require_admin_rejects_missing_header() {
    let config = test_config(Some("secret-token"));
    let headers = HeaderMap::new();

    let result = require_admin(&config, &headers);
    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Authentication(_) => {}
        e => panic!("Expected Authentication error, got: {:?}", e),
    }
    assert!(!is_admin(&config, &headers));
}

#[test]
fn test_require_admin_rejects_wrong_token() {
    let config = test_config(Some("secret-token"));
    let headers = headers_with_token("not-the-token");

    let result = require_admin(&config, &headers);
    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Authorization(_) => {}
        e => panic!("Expected Authorization error, got: {:?}", e),
    }
    assert!(!is_admin(&config, &headers));
}

#[test]
fn test_admin_disabled_when_unconfigured() {
    // Without a configured token, no header value can grant admin access.
    let config = test_config(None);
    let headers = headers_with_token("anything");

    let result = require_admin(&config, &headers);
    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Authentication(_) => {}
        e => panic!("Expected Authentication error, got: {:?}", e),
    }
    assert!(!is_admin(&config, &headers));
}
