/**
 * API Error Types
 *
 * This module defines the error taxonomy for the API. Every failure a
 * handler or gate can produce is one of these variants, each with a fixed
 * HTTP status code.
 *
 * # Error Categories
 *
 * - `Unauthenticated` - no token, malformed bearer header, or a token that
 *   failed verification (signature, expiry, shape)
 * - `Forbidden` - a valid token whose role does not permit the operation,
 *   or a requester that does not own the resource being modified
 * - `InvalidCredentials` - login failure; deliberately identical for
 *   unknown username and wrong password so login never leaks existence
 * - `Validation` - unacceptable request body content
 * - `NotFound` - referenced entity absent
 * - `Conflict` - unique constraint violated (registration only)
 * - `Internal` - unexpected storage or codec failure
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
///
/// Gates and handlers short-circuit with one of these; the `IntoResponse`
/// impl in `conversion.rs` turns it into a terminal JSON response. Errors
/// are never retried and never silently swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Missing, malformed, expired, or tampered authentication token
    #[error("missing or invalid authentication token")]
    Unauthenticated,

    /// Valid token, insufficient permissions
    #[error("insufficient permissions")]
    Forbidden,

    /// Login failure. Same message for unknown user and wrong password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Unacceptable request content
    #[error("{0}")]
    Validation(String),

    /// Referenced entity absent
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violated
    #[error("{0}")]
    Conflict(String),

    /// Unexpected storage or codec failure. Detail is logged at the point
    /// of failure, never sent to the client.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Storage errors bubble up as `Internal` unless they map to a known
/// condition (row-not-found maps to `NotFound`).
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::not_found("resource not found"),
            err => {
                tracing::error!("database error: {err:?}");
                ApiError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::validation("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("gone").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("taken").status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_login_failure_does_not_distinguish_cases() {
        // Unknown username and wrong password must render identically.
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "invalid username or password"
        );
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err, ApiError::not_found("resource not found"));
    }

    #[test]
    fn test_internal_error_hides_detail() {
        assert_eq!(ApiError::Internal.to_string(), "internal server error");
    }
}
