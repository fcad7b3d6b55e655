//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::analysis::AnalysisPipeline;
use crate::kernel::{AppConfig, JsonStorage, ServerDeps};
use crate::server::routes::{analyze_handler, get_analysis_handler, health_handler, root_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
    pub storage: JsonStorage,
}

/// Build the Axum application router.
pub fn build_app(config: &AppConfig) -> Result<Router> {
    let deps = ServerDeps::from_config(config)?;
    let pipeline = Arc::new(AnalysisPipeline::new(deps, config.timeouts.clone()));
    let storage = JsonStorage::new(&config.storage_dir);

    let app_state = AppState { pipeline, storage };

    let origins: Vec<HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/analyze", post(analyze_handler))
        .route("/api/v1/analysis/:id", get(get_analysis_handler))
        // Hard backstop above the per-pipeline budgets
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
