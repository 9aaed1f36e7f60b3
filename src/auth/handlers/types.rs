/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;
use crate::auth::Role;

/// Registration request.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Chosen username (3-30 chars, starts with a letter, alphanumeric or
    /// underscore)
    pub username: String,
    /// Email address
    pub email: String,
    /// Plaintext password (hashed before storage, at least 8 chars)
    pub password: String,
    /// Requested role. Defaults to `user` when omitted.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Login request.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    /// Plaintext password, verified against the stored hash
    pub password: String,
}

/// Returned by a successful login.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// Signed bearer token (72-hour expiry)
    pub token: String,
    pub user: UserResponse,
}

/// Public view of a credential. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}
