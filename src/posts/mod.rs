//! Posts Module
//!
//! Blog post and comment storage and handlers. Business logic here is a
//! thin pass-through to storage; the only invariants are existence checks
//! and the ownership rule on edits and deletes. Authorization itself is
//! enforced by the gates in [`crate::middleware`] before these handlers
//! run.

/// Post and comment models and database operations
pub mod db;

/// HTTP handlers for post and comment endpoints
pub mod handlers;

pub use db::{Comment, Post};
pub use handlers::{create_comment, create_post, delete_post, get_post, list_posts, update_post};
