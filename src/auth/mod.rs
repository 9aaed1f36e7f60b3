//! Authentication Module
//!
//! This module handles user registration, login, and token management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and the Role enum
//! ├── users.rs        - Stored credential model and database operations
//! ├── sessions.rs     - Token codec (issue and verify signed tokens)
//! ├── password.rs     - One-way password hashing and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Login handler (session issuer)
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: user provides username, email, password, optional role →
//!    credential stored with a bcrypt hash
//! 2. **Login**: credentials verified → signed token returned (72h expiry)
//! 3. **Authenticated request**: bearer token verified by the gates in
//!    [`crate::middleware`] → identity attached to the request
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//!   outward
//! - Tokens are signed with a process-wide secret injected at startup;
//!   rotating the secret invalidates all outstanding tokens
//! - Login returns the same error for unknown usernames and wrong passwords

use serde::{Deserialize, Serialize};

/// Stored credential model and database operations
pub mod users;

/// Token codec: issue and verify signed, expiring identity assertions
pub mod sessions;

/// One-way password hashing and verification
pub mod password;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{login, me, register};

/// Role carried by a stored credential and asserted by every token.
///
/// Only authors may create, update, or delete posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Author,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Author => "author",
        }
    }

    pub fn from_str(s: &str) -> Option<Role> {
        match s {
            "user" => Some(Role::User),
            "author" => Some(Role::Author),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_str(Role::Author.as_str()), Some(Role::Author));
        assert_eq!(Role::from_str(Role::User.as_str()), Some(Role::User));
        assert_eq!(Role::from_str("admin"), None);
    }

    #[test]
    fn test_role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Author).unwrap(), "\"author\"");
        assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
    }
}
