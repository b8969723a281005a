//! Health check endpoints

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Routes for liveness and readiness probes.
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "repolens-web"
    }))
}

async fn ready_check() -> Json<Value> {
    Json(json!({
        "status": "ready"
    }))
}
