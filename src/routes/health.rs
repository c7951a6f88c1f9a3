//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe used by Kubernetes, ECS, systemd, and
//! load balancers to verify the service is alive.

use axum::Json;

use crate::status::{self, Health};

/// Health check handler.
///
/// Returns the status provider's payload as JSON. This is a liveness probe -
/// it only checks that the process can respond to HTTP, so it always answers
/// 200 with `{"status":"ok"}`. The request itself is ignored entirely.
pub async fn health() -> Json<Health> {
    Json(status::status())
}
