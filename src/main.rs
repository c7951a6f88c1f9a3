//! Traubling backend: health-check service.
//!
//! This is the application entry point. It initializes tracing, loads the
//! bind configuration from the environment, sets up the Axum router, and
//! starts the HTTP server. A failure to bind the listener is fatal.

mod config;
mod routes;
mod status;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, DEFAULT_LOG_FILTER};
use routes::create_router;

#[tokio::main]
async fn main() {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load();
    tracing::info!(host = %config.host, port = %config.port, "Loaded configuration");

    // Create router
    let app = create_router();

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }
}
