use axum::response::Json;
use serde_json::{Value, json};

/// `GET /health` — liveness probe; reachable means healthy.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
