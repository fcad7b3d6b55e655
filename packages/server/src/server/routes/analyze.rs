use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::domains::analysis::{AnalysisError, ContentType};
use crate::server::app::AppState;

fn default_content_type() -> ContentType {
    ContentType::Text
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default = "default_content_type")]
    pub content_type: ContentType,
    pub content: String,
    /// ISO 639-1 hint; omitted means auto-detect
    pub language: Option<String>,
}

/// POST /api/v1/analyze
///
/// The only client-visible error is 400 for unusable input. Every other
/// failure mode comes back as a 200 with a warning verdict.
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    info!(content_type = ?request.content_type, "Analysis requested");

    let result = state
        .pipeline
        .run_analysis(
            request.content_type,
            &request.content,
            request.language.as_deref(),
        )
        .await;

    match result {
        Ok(result) => {
            match serde_json::to_value(&result) {
                Ok(value) => state.storage.save(&result.id, value).await,
                Err(e) => error!(error = %e, "Failed to serialize result for storage"),
            }
            Json(result).into_response()
        }
        Err(e @ AnalysisError::InvalidInput(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// GET /api/v1/analysis/{id}
pub async fn get_analysis_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.storage.get(&id).await {
        Some(result) => Json(result).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no analysis with id {}", id) })),
        )
            .into_response(),
    }
}
