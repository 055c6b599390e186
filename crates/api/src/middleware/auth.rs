//! # Authentication Module
//!
//! Admin access control for the SalonBook API.
//!
//! The original deployment model is a single-operator salon: there are no
//! user accounts. Administrative endpoints are instead protected by a static
//! token configured through the environment and presented by the client in
//! the `X-Admin-Token` header. The token lives in [`ApiConfig`] inside the
//! shared state, so the check is explicit per request rather than relying on
//! process-wide session state.

use axum::http::HeaderMap;
use salonbook_core::errors::BookingError;

use crate::{config::ApiConfig, middleware::error_handling::AppError};

/// Header carrying the admin token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Returns true when the request carries the configured admin token.
///
/// Unlike [`require_admin`], this never fails: it is used where admin status
/// merely changes behavior (e.g. admin-created appointments skip the
/// anonymous-contact requirements).
pub fn is_admin(config: &ApiConfig, headers: &HeaderMap) -> bool {
    match (&config.admin_token, headers.get(ADMIN_TOKEN_HEADER)) {
        (Some(expected), Some(provided)) => {
            provided.to_str().map(|token| token == expected).unwrap_or(false)
        }
        _ => false,
    }
}

/// Rejects the request unless it carries the configured admin token.
///
/// # Errors
///
/// * `BookingError::Authentication` - No token configured, or none provided
/// * `BookingError::Authorization` - A token was provided but does not match
pub fn require_admin(config: &ApiConfig, headers: &HeaderMap) -> Result<(), AppError> {
    let Some(expected) = &config.admin_token else {
        return Err(AppError(BookingError::Authentication(
            "Admin access is not configured".to_string(),
        )));
    };

    let Some(provided) = headers.get(ADMIN_TOKEN_HEADER) else {
        return Err(AppError(BookingError::Authentication(
            "Admin token required".to_string(),
        )));
    };

    if provided.to_str().ok() != Some(expected.as_str()) {
        return Err(AppError(BookingError::Authorization(
            "Admin access required".to_string(),
        )));
    }

    Ok(())
}
