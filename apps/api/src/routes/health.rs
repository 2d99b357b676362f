use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and model backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "salary-api",
        "model": state.predictor.backend()
    }))
}

/// GET /health when the model failed to load at startup.
pub async fn degraded_health_handler() -> Json<Value> {
    Json(json!({
        "status": "degraded",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "salary-api",
        "model": "unavailable"
    }))
}
