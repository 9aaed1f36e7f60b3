/**
 * Get Current User Handler
 *
 * This module implements GET /api/auth/me, which returns the public view
 * of the authenticated user. The route sits behind the authentication
 * gate, so the identity is read from request extensions rather than
 * re-parsing the bearer token here.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - handled by the authentication gate
/// * `404 Not Found` - credential row no longer exists
pub async fn me(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("authenticated user {} not found", user.user_id);
            ApiError::not_found("user not found")
        })?;

    Ok(Json(user.into()))
}
