//! HTTP routes for the backend.
//!
//! The health endpoint is registered under two path aliases so that probes
//! configured for either the `/health` or `/healthz` convention work without
//! changes. Request tracing comes from tower-http's `TraceLayer`.

pub mod health;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/healthz", get(health::health))
        .layer(TraceLayer::new_for_http())
}
