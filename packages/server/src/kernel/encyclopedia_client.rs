use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{BaseEncyclopediaService, EncyclopediaSummary};

/// Wikipedia REST API client for encyclopedic context.
///
/// Needs no credentials, so there is no noop twin; a missing page is the
/// ordinary `Ok(None)` outcome.
pub struct WikipediaClient {
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrls>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
    #[serde(default)]
    page: String,
}

impl WikipediaClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BaseEncyclopediaService for WikipediaClient {
    async fn summary(&self, topic: &str) -> Result<Option<EncyclopediaSummary>> {
        let slug = urlencoding::encode(&topic.replace(' ', "_")).into_owned();
        let url = format!("https://en.wikipedia.org/api/rest_v1/page/summary/{}", slug);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send encyclopedia lookup request")?;

        // 404 means no page for the topic, not a failure
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(topic = %topic, "No encyclopedia page found");
            return Ok(None);
        }

        if !response.status().is_success() {
            anyhow::bail!("Wikipedia API error {}", response.status());
        }

        let summary: SummaryResponse = response
            .json()
            .await
            .context("Failed to parse encyclopedia response")?;

        if summary.extract.is_empty() {
            return Ok(None);
        }

        let page_url = summary
            .content_urls
            .and_then(|u| u.desktop)
            .map(|d| d.page)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| format!("https://en.wikipedia.org/wiki/{}", slug));

        tracing::info!(topic = %topic, title = %summary.title, "Encyclopedia lookup completed");
        Ok(Some(EncyclopediaSummary {
            title: summary.title,
            extract: summary.extract,
            url: page_url,
        }))
    }
}
