//! API Error Module
//!
//! This module defines the error taxonomy used across handlers and
//! middleware, and the conversion of those errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions and status code mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, so handlers and gates can
//! return it directly. Each variant maps to a fixed status code and a JSON
//! body of the form `{"error": "...", "status": 401}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
