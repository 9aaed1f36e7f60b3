/**
 * Server Initialization
 *
 * This module handles initialization of the Axum HTTP server: database
 * pool creation, migrations, state construction, and route configuration.
 *
 * # Initialization Steps
 *
 * 1. Connect the PostgreSQL pool
 * 2. Run embedded migrations
 * 3. Build the application state (pool + token codec)
 * 4. Configure the router
 */

use axum::Router;
use sqlx::PgPool;

use crate::auth::sessions::TokenCodec;
use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// # Errors
///
/// Fails if the database is unreachable. Migration failures are logged but
/// do not prevent startup; the schema may already be up to date.
pub async fn create_app(config: &Config) -> Result<Router, sqlx::Error> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("database connection pool created");

    tracing::info!("running database migrations");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("database migrations completed"),
        Err(e) => {
            tracing::error!("failed to run database migrations: {e:?}");
            tracing::warn!("continuing; database schema may be out of date");
        }
    }

    let state = AppState {
        pool,
        tokens: TokenCodec::new(&config.jwt_secret),
    };

    Ok(create_router(state))
}
