use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
    timestamp: String,
}

/// Health check endpoint.
///
/// The server has no hard external dependencies (every adapter degrades
/// to a noop), so reachability is health.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "crediscope-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Service banner at the root path.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "CrediScope API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "analyze": "POST /api/v1/analyze",
            "analysis": "GET /api/v1/analysis/{id}",
            "health": "GET /health",
        },
    }))
}
