use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Component status
pub async fn health(State(state): State<AppState>) -> Response {
    let storage = if state.store.data_dir().is_dir() {
        "operational"
    } else {
        "unavailable"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "storage": storage,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can we read and write the data directory?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    let data_dir = state.store.data_dir();

    if data_dir.is_dir() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        log::warn!(
            "Readiness check failed: data directory {} is missing",
            data_dir.display()
        );
        (StatusCode::SERVICE_UNAVAILABLE, "Data directory unavailable").into_response()
    }
}
