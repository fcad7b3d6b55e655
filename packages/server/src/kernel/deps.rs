//! Server dependencies for the analysis pipeline (traits for testability)
//!
//! Central dependency container. Every external service sits behind a
//! trait; construction picks the real client when its credential is
//! configured and the noop twin otherwise, so a missing key degrades a
//! single adapter instead of failing startup.

use anyhow::Result;
use std::sync::Arc;

use super::config::AppConfig;
use super::encyclopedia_client::WikipediaClient;
use super::factcheck_client::{FactCheckClient, NoopFactCheckService};
use super::gemini_client::{GeminiClient, NoopAI};
use super::page_fetcher::PageFetcher;
use super::safe_browsing_client::{NoopUrlSafetyService, SafeBrowsingClient};
use super::search_client::{CustomSearchClient, NoopSearchService};
use super::translation_client::{NoopTranslationService, TranslationClient};
use super::vision_client::{NoopVisionService, VisionClient};
use super::{
    BaseAI, BaseEncyclopediaService, BaseFactCheckService, BasePageFetcher, BaseSearchService,
    BaseTranslationService, BaseUrlSafetyService, BaseVisionService,
};

/// Evidence-source adapters accessible to the pipeline
#[derive(Clone)]
pub struct ServerDeps {
    pub fact_check: Arc<dyn BaseFactCheckService>,
    pub web_search: Arc<dyn BaseSearchService>,
    pub encyclopedia: Arc<dyn BaseEncyclopediaService>,
    pub translation: Arc<dyn BaseTranslationService>,
    pub vision: Arc<dyn BaseVisionService>,
    pub url_safety: Arc<dyn BaseUrlSafetyService>,
    pub ai: Arc<dyn BaseAI>,
    pub page_fetcher: Arc<dyn BasePageFetcher>,
}

impl ServerDeps {
    /// Build adapters from configuration, substituting noop services for
    /// anything without credentials.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fact_check: Arc<dyn BaseFactCheckService> = match &config.fact_check_api_key {
            Some(key) => Arc::new(FactCheckClient::new(key.clone())?),
            None => Arc::new(NoopFactCheckService),
        };

        let web_search: Arc<dyn BaseSearchService> =
            match (&config.custom_search_api_key, &config.custom_search_cx) {
                (Some(key), Some(cx)) => Arc::new(CustomSearchClient::new(key.clone(), cx.clone())?),
                _ => Arc::new(NoopSearchService),
            };

        let translation: Arc<dyn BaseTranslationService> = match &config.translation_api_key {
            Some(key) => Arc::new(TranslationClient::new(key.clone())?),
            None => Arc::new(NoopTranslationService),
        };

        let vision: Arc<dyn BaseVisionService> = match &config.vision_api_key {
            Some(key) => Arc::new(VisionClient::new(key.clone())?),
            None => Arc::new(NoopVisionService),
        };

        let url_safety: Arc<dyn BaseUrlSafetyService> = match &config.safe_browsing_api_key {
            Some(key) => Arc::new(SafeBrowsingClient::new(key.clone())?),
            None => Arc::new(NoopUrlSafetyService),
        };

        let ai: Arc<dyn BaseAI> = match &config.genai_api_key {
            Some(key) => Arc::new(GeminiClient::new(key.clone())?),
            None => Arc::new(NoopAI),
        };

        Ok(Self {
            fact_check,
            web_search,
            encyclopedia: Arc::new(WikipediaClient::new()?),
            translation,
            vision,
            url_safety,
            ai,
            page_fetcher: Arc::new(PageFetcher::new()?),
        })
    }
}
