//! HTTP handlers for authentication endpoints.
//!
//! - `POST /api/auth/register` - create a credential
//! - `POST /api/auth/login` - verify credentials, mint a token
//! - `GET /api/auth/me` - public view of the authenticated user

/// Request/response types shared across handlers
pub mod types;

/// User registration handler
pub mod register;

/// Login handler (session issuer)
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::me;
pub use register::register;
