//! Bounded page fetcher for URL analysis.
//!
//! Fetches a page with a browser-like User-Agent, strips markup down to
//! visible text, and truncates to a fixed character budget. No JavaScript
//! rendering; static HTML only.

use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

use super::BasePageFetcher;

/// Character budget handed to the text pipeline
const TEXT_BUDGET: usize = 5000;

pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        // Use a browser-like User-Agent to avoid bot detection
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(8))
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Strip markup from an HTML document and return visible text,
    /// skipping script/style/nav content.
    fn extract_text(html: &str) -> String {
        let document = Html::parse_document(html);

        let skipped: Vec<String> =
            match Selector::parse("script, style, noscript, nav, header, footer, aside") {
                Ok(skip) => document
                    .select(&skip)
                    .map(|el| el.text().collect::<String>())
                    .collect(),
                Err(_) => vec![],
            };

        let mut text: String = document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ");

        for chunk in skipped {
            if !chunk.trim().is_empty() {
                text = text.replace(&chunk, " ");
            }
        }

        // Collapse whitespace runs left behind by stripped tags
        let collapsed: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
        collapsed.chars().take(TEXT_BUDGET).collect()
    }

    /// Normalize URL by adding https:// if no scheme is present
    fn normalize_url(url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }
}

#[async_trait]
impl BasePageFetcher for PageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let url = Self::normalize_url(url);
        debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, url);
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;

        let text = Self::extract_text(&html);
        if text.trim().len() < 100 {
            warn!(url = %url, "Page has minimal content");
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_strips_markup() {
        let html = "<html><body><h1>Claim</h1><p>vaccines and microchips</p></body></html>";
        let text = PageFetcher::extract_text(html);
        assert!(text.contains("Claim"));
        assert!(text.contains("vaccines and microchips"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_extract_text_skips_script() {
        let html = "<html><body><script>var x = 'hidden';</script><p>visible</p></body></html>";
        let text = PageFetcher::extract_text(html);
        assert!(text.contains("visible"));
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn test_extract_text_respects_budget() {
        let body = "word ".repeat(3000);
        let html = format!("<html><body><p>{}</p></body></html>", body);
        let text = PageFetcher::extract_text(&html);
        assert!(text.chars().count() <= TEXT_BUDGET);
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(PageFetcher::normalize_url("example.com"), "https://example.com");
        assert_eq!(
            PageFetcher::normalize_url("http://example.com"),
            "http://example.com"
        );
    }
}
