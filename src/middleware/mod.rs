//! Middleware Module
//!
//! Request gates that run before handlers:
//!
//! - **`auth`** - authentication (any valid token) and authorization
//!   (author role) gates
//!
//! A gate that fails short-circuits the handler chain and returns a
//! terminal error response; the downstream handler is never invoked.

pub mod auth;

pub use auth::{require_auth, require_author, AuthUser, AuthenticatedUser};
