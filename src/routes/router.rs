/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the API route table, static thumbnail serving, and a 404 fallback into
 * a single Axum router.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new();

    // API routes, with gates wired to the token codec
    let router = configure_api_routes(router, &state.tokens);

    // Thumbnail assets
    let router = router.nest_service("/uploads", ServeDir::new("uploads"));

    // Fallback handler for unknown routes
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
