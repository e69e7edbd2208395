//! HTTP route handlers for the catalog server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health       - Liveness check
//! GET  /items        - Full item list, in seed order
//! GET  /items/{id}   - Single item, 404 if absent
//! ```

pub mod items;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/items", get(items::list))
        .route("/items/{id}", get(items::show))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
