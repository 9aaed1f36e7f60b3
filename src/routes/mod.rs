//! Routes Module
//!
//! Router configuration: the main router assembly and the API route table.

/// Main router creation
pub mod router;

/// API route configuration
pub mod api_routes;

pub use router::create_router;
