use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{BaseUrlSafetyService, UrlSafetyReport};

const THREAT_MATCHES_URL: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";

/// Google Safe Browsing v4 client
pub struct SafeBrowsingClient {
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ThreatMatchesResponse {
    #[serde(default)]
    matches: Vec<ThreatMatch>,
}

#[derive(Debug, Deserialize)]
struct ThreatMatch {
    #[serde(rename = "threatType", default)]
    threat_type: String,
}

impl SafeBrowsingClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, client })
    }
}

#[async_trait]
impl BaseUrlSafetyService for SafeBrowsingClient {
    async fn check(&self, url: &str) -> Result<UrlSafetyReport> {
        let payload = json!({
            "client": { "clientId": "crediscope", "clientVersion": "1.0" },
            "threatInfo": {
                "threatTypes": [
                    "MALWARE",
                    "SOCIAL_ENGINEERING",
                    "UNWANTED_SOFTWARE",
                    "POTENTIALLY_HARMFUL_APPLICATION"
                ],
                "platformTypes": ["ANY_PLATFORM"],
                "threatEntryTypes": ["URL"],
                "threatEntries": [{ "url": url }]
            }
        });

        let response = self
            .client
            .post(THREAT_MATCHES_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .context("Failed to send URL safety request")?;

        if !response.status().is_success() {
            anyhow::bail!("Safe Browsing API error {}", response.status());
        }

        // An empty body / no matches field means the URL is clean
        let matches: ThreatMatchesResponse = response
            .json()
            .await
            .unwrap_or(ThreatMatchesResponse { matches: vec![] });

        let threats: Vec<String> = matches.matches.into_iter().map(|m| m.threat_type).collect();
        if !threats.is_empty() {
            tracing::warn!(url = %url, threats = ?threats, "URL flagged by Safe Browsing");
        }

        Ok(UrlSafetyReport { threats })
    }
}

/// No-op URL safety service: treats every URL as clean
pub struct NoopUrlSafetyService;

#[async_trait]
impl BaseUrlSafetyService for NoopUrlSafetyService {
    async fn check(&self, _url: &str) -> Result<UrlSafetyReport> {
        tracing::warn!("NoopUrlSafetyService: check called but no Safe Browsing API key configured");
        Ok(UrlSafetyReport::default())
    }
}
