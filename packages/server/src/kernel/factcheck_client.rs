use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{BaseFactCheckService, ClaimReview, FactCheckClaim};

const CLAIMS_SEARCH_URL: &str = "https://factchecktools.googleapis.com/v1alpha1/claims:search";

/// Google Fact Check Tools API client
pub struct FactCheckClient {
    api_key: String,
    client: reqwest::Client,
}

/// Fact Check Tools API response
#[derive(Debug, Deserialize)]
struct ClaimsResponse {
    #[serde(default)]
    claims: Vec<RawClaim>,
}

#[derive(Debug, Deserialize)]
struct RawClaim {
    #[serde(default)]
    text: String,
    #[serde(rename = "claimReview", default)]
    claim_review: Vec<RawReview>,
}

#[derive(Debug, Deserialize)]
struct RawReview {
    #[serde(default)]
    publisher: RawPublisher,
    #[serde(rename = "textualRating", default)]
    textual_rating: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawPublisher {
    #[serde(default)]
    name: String,
}

impl FactCheckClient {
    /// Create a new Fact Check Tools client
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, client })
    }
}

#[async_trait]
impl BaseFactCheckService for FactCheckClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<FactCheckClaim>> {
        let response = self
            .client
            .get(CLAIMS_SEARCH_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("query", query),
                ("pageSize", &limit.to_string()),
            ])
            .send()
            .await
            .context("Failed to send fact-check search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Fact Check Tools API error {}: {}", status, body);
        }

        let claims_response: ClaimsResponse = response
            .json()
            .await
            .context("Failed to parse fact-check response")?;

        let claims: Vec<FactCheckClaim> = claims_response
            .claims
            .into_iter()
            .map(|c| FactCheckClaim {
                text: c.text,
                reviews: c
                    .claim_review
                    .into_iter()
                    .map(|r| ClaimReview {
                        publisher: r.publisher.name,
                        rating: r.textual_rating,
                        url: r.url,
                    })
                    .collect(),
            })
            .collect();

        tracing::info!(query = %query, found = claims.len(), "Fact-check search completed");
        Ok(claims)
    }
}

/// No-op fact-check service for testing or when API key not configured
pub struct NoopFactCheckService;

#[async_trait]
impl BaseFactCheckService for NoopFactCheckService {
    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<FactCheckClaim>> {
        tracing::warn!("NoopFactCheckService: search called but no fact-check API key configured");
        Ok(vec![])
    }
}
