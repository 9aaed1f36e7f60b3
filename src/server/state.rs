/**
 * Application State
 *
 * This module defines the application state and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * Both fields are cheaply cloneable handles safe for concurrent use: the
 * pool manages its own connections, and the token codec is immutable after
 * construction (the signing secret is loaded once at startup and never
 * mutated).
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::TokenCodec;

/// Central state container for the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,

    /// Token codec holding the process-wide signing secret
    pub tokens: TokenCodec,
}

/// Allow handlers that only touch the database to extract `State<PgPool>`.
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

/// Allow the gates and handlers to extract `State<TokenCodec>`.
impl FromRef<AppState> for TokenCodec {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
