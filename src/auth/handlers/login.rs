/**
 * Login Handler
 *
 * This module implements the session issuer for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the credential by username (case-sensitive exact match)
 * 2. Verify the password against the stored hash
 * 3. Mint a signed token carrying the user's id and role
 * 4. Return the token and the public view of the credential
 *
 * # Security
 *
 * - Unknown username and wrong password produce the identical error, so
 *   login cannot be used to enumerate usernames
 * - Password verification delegates to bcrypt's constant-time comparison
 * - The password hash is never returned
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::password;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown username or wrong password (identical
///   response in both cases)
/// * `500 Internal Server Error` - storage, hashing, or codec failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("login request for username: {}", request.username);

    let user = get_user_by_username(&state.pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login failed for username: {}", request.username);
            ApiError::InvalidCredentials
        })?;

    let valid = password::check(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification error: {e:?}");
        ApiError::Internal
    })?;

    if !valid {
        tracing::warn!("login failed for username: {}", request.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id, user.role).map_err(|e| {
        tracing::error!("failed to issue token: {e}");
        ApiError::Internal
    })?;

    tracing::info!("user logged in: {}", user.username);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
