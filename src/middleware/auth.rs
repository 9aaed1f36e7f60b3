/**
 * Authentication and Authorization Gates
 *
 * This module provides the middleware protecting authenticated routes. It
 * extracts the bearer token from the Authorization header, verifies it
 * against the token codec, and attaches the verified identity to request
 * extensions for handlers to read.
 *
 * Two gates are provided:
 *
 * - `require_auth` - any valid token; failures return 401
 * - `require_author` - additionally requires the author role; a valid
 *   token with the wrong role returns 403, not 401
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::{Claims, TokenCodec};
use crate::auth::Role;
use crate::error::ApiError;

/// Verified identity extracted from a bearer token.
///
/// Immutable once issued; carries exactly what the token asserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub role: Role,
}

/// Authentication gate
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token signature and expiry
/// 3. Attaches the identity to request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid; the
/// downstream handler is never invoked.
pub async fn require_auth(
    State(codec): State<TokenCodec>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = authenticate(&codec, request.headers())?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Authorization gate (author-only)
///
/// Same extraction and verification as [`require_auth`], then requires the
/// author role. A valid token with the wrong role returns 403 Forbidden.
/// On success the full identity is attached so handlers can enforce
/// ownership.
pub async fn require_author(
    State(codec): State<TokenCodec>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = authenticate(&codec, request.headers())?;

    if claims.role != Role::Author {
        tracing::warn!("user {} denied: role {} is not author", claims.sub, claims.role.as_str());
        return Err(ApiError::Forbidden);
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Extract and verify the bearer token from the request headers.
fn authenticate(codec: &TokenCodec, headers: &HeaderMap) -> Result<Claims, ApiError> {
    let token = bearer_token(headers)?;

    codec.verify(token).map_err(|e| {
        tracing::warn!("invalid token: {e}");
        ApiError::Unauthenticated
    })
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing authorization header");
            ApiError::Unauthenticated
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("invalid authorization header format");
        ApiError::Unauthenticated
    })?;

    if token.is_empty() {
        tracing::warn!("empty bearer token");
        return Err(ApiError::Unauthenticated);
    }

    Ok(token)
}

/// Axum extractor for the authenticated user.
///
/// Reads the identity that a gate attached to request extensions. Using it
/// on a route without a gate is a programming error and surfaces as 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            bearer_token(&HeaderMap::new()).unwrap_err(),
            ApiError::Unauthenticated
        );
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Token abc");
        assert_eq!(bearer_token(&headers).unwrap_err(), ApiError::Unauthenticated);
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(bearer_token(&headers).unwrap_err(), ApiError::Unauthenticated);
    }

    #[test]
    fn test_authenticate_valid_token() {
        let codec = TokenCodec::new("gate-secret");
        let token = codec.issue(9, Role::Author).unwrap();
        let headers = headers_with(&format!("Bearer {token}"));

        let claims = authenticate(&codec, &headers).unwrap();
        assert_eq!(claims.sub, 9);
        assert_eq!(claims.role, Role::Author);
    }

    #[test]
    fn test_authenticate_rejects_foreign_token() {
        let codec = TokenCodec::new("gate-secret");
        let token = TokenCodec::new("other-secret").issue(9, Role::Author).unwrap();
        let headers = headers_with(&format!("Bearer {token}"));

        assert_eq!(
            authenticate(&codec, &headers).unwrap_err(),
            ApiError::Unauthenticated
        );
    }
}
