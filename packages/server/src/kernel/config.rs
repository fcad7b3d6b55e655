//! Application configuration loaded from the environment.
//!
//! Every external-service credential is optional: a missing key swaps the
//! real client for its noop twin at construction time (see `deps.rs`),
//! so the server always starts and degrades per-adapter instead.

use std::time::Duration;

/// Immutable configuration passed into adapter construction.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub storage_dir: String,

    pub fact_check_api_key: Option<String>,
    pub custom_search_api_key: Option<String>,
    pub custom_search_cx: Option<String>,
    pub translation_api_key: Option<String>,
    pub vision_api_key: Option<String>,
    pub safe_browsing_api_key: Option<String>,
    pub genai_api_key: Option<String>,

    pub timeouts: PipelineTimeouts,
}

/// Per-stage timeout budget. Adapter budgets are single-digit seconds;
/// the outer budget bounds a whole request.
#[derive(Debug, Clone)]
pub struct PipelineTimeouts {
    pub fact_check: Duration,
    pub web_search: Duration,
    pub encyclopedia: Duration,
    pub language_detect: Duration,
    pub translate: Duration,
    pub llm: Duration,
    pub page_fetch: Duration,
    pub url_safety: Duration,
    pub text_pipeline: Duration,
    pub url_pipeline: Duration,
    pub image_pipeline: Duration,
}

impl Default for PipelineTimeouts {
    fn default() -> Self {
        Self {
            fact_check: Duration::from_secs(4),
            web_search: Duration::from_secs(4),
            encyclopedia: Duration::from_secs(3),
            language_detect: Duration::from_secs(2),
            translate: Duration::from_secs(3),
            llm: Duration::from_secs(8),
            page_fetch: Duration::from_secs(8),
            url_safety: Duration::from_secs(4),
            text_pipeline: Duration::from_secs(20),
            url_pipeline: Duration::from_secs(25),
            image_pipeline: Duration::from_secs(20),
        }
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let frontend_origins = std::env::var("FRONTEND_ORIGIN")
            .map(|o| o.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ]
            });

        Self {
            port,
            frontend_origins,
            storage_dir: std::env::var("STORAGE_DIR").unwrap_or_else(|_| "storage".to_string()),
            // FACT_CHECK_API_KEY with FACTCHECK_API_KEY as a legacy alias
            fact_check_api_key: env_opt("FACT_CHECK_API_KEY").or_else(|| env_opt("FACTCHECK_API_KEY")),
            custom_search_api_key: env_opt("CUSTOM_SEARCH_API_KEY"),
            custom_search_cx: env_opt("CUSTOM_SEARCH_CX"),
            translation_api_key: env_opt("TRANSLATION_API_KEY"),
            vision_api_key: env_opt("VISION_API_KEY").or_else(|| env_opt("GOOGLE_VISION_API_KEY")),
            safe_browsing_api_key: env_opt("SAFE_BROWSING_API_KEY"),
            genai_api_key: env_opt("GENAI_API_KEY"),
            timeouts: PipelineTimeouts::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_origins: vec!["http://localhost:5173".to_string()],
            storage_dir: "storage".to_string(),
            fact_check_api_key: None,
            custom_search_api_key: None,
            custom_search_cx: None,
            translation_api_key: None,
            vision_api_key: None,
            safe_browsing_api_key: None,
            genai_api_key: None,
            timeouts: PipelineTimeouts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credentials() {
        let config = AppConfig::default();
        assert!(config.fact_check_api_key.is_none());
        assert!(config.genai_api_key.is_none());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn adapter_timeouts_are_single_digit_seconds() {
        let t = PipelineTimeouts::default();
        for budget in [t.fact_check, t.web_search, t.encyclopedia, t.llm, t.page_fetch] {
            assert!(budget <= Duration::from_secs(9));
        }
        assert!(t.url_pipeline >= t.text_pipeline);
    }
}
