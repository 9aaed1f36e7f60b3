/**
 * Server Configuration
 *
 * Configuration is loaded from environment variables once at startup.
 * `DATABASE_URL` and `JWT_SECRET` are required and the process fails fast
 * without them: the signing secret is injected into the token codec at
 * construction rather than read ambiently, and rotating it invalidates
 * every outstanding token.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Token signing secret, process-wide, loaded once
    pub jwt_secret: String,
    /// Listen port (SERVER_PORT, default 8080)
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let jwt_secret = require("JWT_SECRET")?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Ok(Config {
            database_url,
            jwt_secret,
            port,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
