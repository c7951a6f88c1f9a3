//! Configuration loading and constants.
//!
//! Loads the bind host and port from the process environment, optionally
//! seeded from a local `.env` file. Both values are kept as strings with no
//! validation; the listener bind is where a bad value surfaces.

use std::env;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: &str = "8080";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "traubling_backend=debug,tower_http=debug";

/// Server bind configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// A `.env` file in the working directory is applied first if present;
    /// a missing or unreadable file is ignored. `HOST` and `PORT` then come
    /// from the process environment, falling back to [`DEFAULT_HOST`] and
    /// [`DEFAULT_PORT`]. An empty value counts as unset.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Reads `HOST` and `PORT` from the process environment only.
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", DEFAULT_HOST),
            port: env_or("PORT", DEFAULT_PORT),
        }
    }

    /// The `host:port` string handed to the listener bind call.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads an environment variable, treating unset and empty as the default.
fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
