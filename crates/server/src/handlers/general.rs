//! # General Route Handlers
//!
//! Liveness endpoints that do not touch the pipeline.

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
