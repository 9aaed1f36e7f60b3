/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate username, email, and password
 * 2. Check for an existing credential with the same username or email
 * 3. Hash the password
 * 4. Insert the credential
 *
 * # Validation
 *
 * - Username must be 3-30 characters, start with a letter, and contain
 *   only letters, digits, and underscores
 * - Email must have a local part and a dotted domain
 * - Password must be at least 8 characters
 * - Role is optional and defaults to `user`
 *
 * The existence check intentionally reports a conflict: leaking whether a
 * username or email is taken is an accepted tradeoff at registration.
 * Login never leaks existence.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::users::{create_user, get_user_by_username_or_email};
use crate::auth::password;
use crate::error::ApiError;

/// Validate username format.
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate email shape: non-empty local part, domain with a dot.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid username, email, or password
/// * `409 Conflict` - username or email already registered
/// * `500 Internal Server Error` - hashing or storage failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("registration request for username: {}", request.username);

    if !is_valid_username(&request.username) {
        return Err(ApiError::validation(
            "username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !is_valid_email(&request.email) {
        return Err(ApiError::validation("invalid email format"));
    }

    if request.password.len() < 8 {
        return Err(ApiError::validation("password must be at least 8 characters"));
    }

    if get_user_by_username_or_email(&pool, &request.username, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("registration conflict for username: {}", request.username);
        return Err(ApiError::conflict("username or email already exists"));
    }

    let role = request.role.unwrap_or_default();

    let password_hash = password::hash(&request.password).map_err(|e| {
        tracing::error!("failed to hash password: {e:?}");
        ApiError::Internal
    })?;

    let user = create_user(&pool, &request.username, &request.email, &password_hash, role).await?;

    tracing::info!("user registered: {} (role {})", user.username, user.role.as_str());

    Ok((StatusCode::CREATED, Json(user.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("a_b_3"));
        assert!(is_valid_username("Writer_2024"));
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("3alice"));
        assert!(!is_valid_username("_alice"));
        assert!(!is_valid_username("alice!"));
        assert!(!is_valid_username("a".repeat(31).as_str()));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@nodot"));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email("alice@example."));
    }
}
