use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{BaseSearchService, SearchResult};

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Google Custom Search API client for cross-verification web search
pub struct CustomSearchClient {
    api_key: String,
    cx: String,
    client: reqwest::Client,
}

/// Custom Search API response
#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Vec<CustomSearchItem>,
}

#[derive(Debug, Deserialize)]
struct CustomSearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

impl CustomSearchClient {
    /// Create a new Custom Search client (requires both key and engine id)
    pub fn new(api_key: String, cx: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, cx, client })
    }
}

#[async_trait]
impl BaseSearchService for CustomSearchClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        // The API caps num at 10
        let num = limit.min(10).to_string();

        let response = self
            .client
            .get(CUSTOM_SEARCH_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", query),
                ("num", &num),
            ])
            .send()
            .await
            .context("Failed to send custom search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Custom Search API error {}: {}", status, body);
        }

        let search_response: CustomSearchResponse = response
            .json()
            .await
            .context("Failed to parse custom search response")?;

        let results: Vec<SearchResult> = search_response
            .items
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                link: item.link,
                snippet: item.snippet,
            })
            .collect();

        tracing::info!(query = %query, found = results.len(), "Cross-verification search completed");
        Ok(results)
    }
}

/// No-op search service for testing or when API key not configured
pub struct NoopSearchService;

#[async_trait]
impl BaseSearchService for NoopSearchService {
    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<SearchResult>> {
        tracing::warn!("NoopSearchService: search called but no Custom Search credentials configured");
        Ok(vec![])
    }
}
