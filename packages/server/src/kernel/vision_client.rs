use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::BaseVisionService;

const VISION_URL: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Google Cloud Vision client used for OCR (TEXT_DETECTION)
pub struct VisionClient {
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateResult>,
}

#[derive(Debug, Default, Deserialize)]
struct AnnotateResult {
    #[serde(rename = "fullTextAnnotation")]
    full_text_annotation: Option<FullTextAnnotation>,
    #[serde(rename = "textAnnotations", default)]
    text_annotations: Vec<TextAnnotation>,
}

#[derive(Debug, Deserialize)]
struct FullTextAnnotation {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    #[serde(default)]
    description: String,
}

impl VisionClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(8))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, client })
    }
}

#[async_trait]
impl BaseVisionService for VisionClient {
    async fn extract_text(&self, image_base64: &str) -> Result<String> {
        let payload = json!({
            "requests": [{
                "image": { "content": image_base64 },
                "features": [{ "type": "TEXT_DETECTION", "maxResults": 50 }]
            }]
        });

        let response = self
            .client
            .post(VISION_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .context("Failed to send OCR request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Vision API error {}: {}", status, body);
        }

        let annotate: AnnotateResponse = response
            .json()
            .await
            .context("Failed to parse OCR response")?;

        // The full-text annotation carries the whole recognized block;
        // the first text annotation is the fallback for older responses.
        let text = annotate
            .responses
            .into_iter()
            .next()
            .map(|r| {
                r.full_text_annotation
                    .map(|f| f.text)
                    .or_else(|| r.text_annotations.into_iter().next().map(|t| t.description))
                    .unwrap_or_default()
            })
            .unwrap_or_default();

        tracing::info!(chars = text.len(), "OCR completed");
        Ok(text.trim().to_string())
    }
}

/// No-op vision service for testing or when API key not configured
pub struct NoopVisionService;

#[async_trait]
impl BaseVisionService for NoopVisionService {
    async fn extract_text(&self, _image_base64: &str) -> Result<String> {
        tracing::warn!("NoopVisionService: OCR called but no Vision API key configured");
        Ok(String::new())
    }
}
