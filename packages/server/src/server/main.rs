// Main entry point for API server

use anyhow::{Context, Result};
use server_core::kernel::AppConfig;
use server_core::server::build_app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CrediScope misinformation analysis API");

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.port,
        fact_check = config.fact_check_api_key.is_some(),
        web_search = config.custom_search_api_key.is_some(),
        translation = config.translation_api_key.is_some(),
        vision = config.vision_api_key.is_some(),
        safe_browsing = config.safe_browsing_api_key.is_some(),
        genai = config.genai_api_key.is_some(),
        "Configuration loaded (false = adapter runs as noop)"
    );

    let app = build_app(&config).context("Failed to build application")?;

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
