use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::BaseTranslationService;

const TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Cloud Translation v2 client (detect + translate)
pub struct TranslationClient {
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    data: DetectData,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    #[serde(default)]
    detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    #[serde(default)]
    language: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText", default)]
    translated_text: String,
}

impl TranslationClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, client })
    }
}

#[async_trait]
impl BaseTranslationService for TranslationClient {
    async fn detect_language(&self, text: &str) -> Result<String> {
        // The detect endpoint only needs a sample of the text
        let sample: String = text.chars().take(1000).collect();

        let response = self
            .client
            .post(format!("{}/detect", TRANSLATE_URL))
            .header("X-Goog-Api-Key", &self.api_key)
            .json(&json!({ "q": sample }))
            .send()
            .await
            .context("Failed to send language detection request")?;

        if !response.status().is_success() {
            anyhow::bail!("Translation API error {}", response.status());
        }

        let detect: DetectResponse = response
            .json()
            .await
            .context("Failed to parse language detection response")?;

        let language = detect
            .data
            .detections
            .first()
            .and_then(|d| d.first())
            .map(|d| d.language.clone())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "en".to_string());

        tracing::debug!(language = %language, "Language detection completed");
        Ok(language)
    }

    async fn translate(&self, text: &str, target: &str) -> Result<String> {
        let response = self
            .client
            .post(TRANSLATE_URL)
            .header("X-Goog-Api-Key", &self.api_key)
            .json(&json!({ "q": text, "target": target, "format": "text" }))
            .send()
            .await
            .context("Failed to send translation request")?;

        if !response.status().is_success() {
            anyhow::bail!("Translation API error {}", response.status());
        }

        let translate: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        let translated = translate
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| text.to_string());

        tracing::debug!(target = %target, "Translation completed");
        Ok(translated)
    }
}

/// No-op translation service: reports English, returns text untouched
pub struct NoopTranslationService;

#[async_trait]
impl BaseTranslationService for NoopTranslationService {
    async fn detect_language(&self, _text: &str) -> Result<String> {
        tracing::warn!("NoopTranslationService: no translation API key configured");
        Ok("en".to_string())
    }

    async fn translate(&self, text: &str, _target: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
