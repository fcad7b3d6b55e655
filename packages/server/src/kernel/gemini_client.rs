use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::BaseAI;

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Gemini generative-text client
pub struct GeminiClient {
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, client })
    }
}

#[async_trait]
impl BaseAI for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.1,
                "maxOutputTokens": 1000,
                "topP": 0.8,
                "topK": 10
            }
        });

        let response = self
            .client
            .post(GENERATE_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .context("Failed to send generation request")?;

        if !response.status().is_success() {
            anyhow::bail!("Gemini API error {}", response.status());
        }

        let generate: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse generation response")?;

        let text = generate
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        tracing::debug!(chars = text.len(), "LLM completion received");
        Ok(text)
    }

    async fn complete_json(&self, prompt: &str) -> Result<String> {
        // Force JSON-only output; the model still sometimes wraps it in
        // prose, so callers must parse defensively.
        let wrapped = format!(
            "IMPORTANT: You MUST respond with ONLY valid JSON. No explanations, \
             no markdown, no text before or after the JSON.\n\n{}\n\n\
             CRITICAL: Start your response with {{ and end with }}. Nothing else.",
            prompt
        );
        self.complete(&wrapped).await
    }
}

/// No-op AI service for testing or when API key not configured
pub struct NoopAI;

#[async_trait]
impl BaseAI for NoopAI {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        tracing::warn!("NoopAI: completion called but no generative API key configured");
        Ok(String::new())
    }
}
