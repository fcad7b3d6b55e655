// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (scoring, templating) lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseSearchService)

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// =============================================================================
// Normalized records returned by adapters
// =============================================================================
//
// Adapters return strongly-typed records so downstream code never needs
// defensive nested lookups into raw JSON.

/// One published review attached to a fact-checked claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimReview {
    pub publisher: String,
    /// Textual rating as reported by the publisher ("False", "Misleading", ...)
    pub rating: String,
    pub url: String,
}

/// A claim returned by the fact-check search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckClaim {
    pub text: String,
    pub reviews: Vec<ClaimReview>,
}

/// A generic web search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// Encyclopedia page summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncyclopediaSummary {
    pub title: String,
    pub extract: String,
    pub url: String,
}

/// URL-safety verdict. `threats` is empty for clean URLs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlSafetyReport {
    pub threats: Vec<String>,
}

impl UrlSafetyReport {
    pub fn is_flagged(&self) -> bool {
        !self.threats.is_empty()
    }
}

// =============================================================================
// Fact-Check Search Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseFactCheckService: Send + Sync {
    /// Search published fact-checks for a claim
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<FactCheckClaim>>;
}

// =============================================================================
// Web Search Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseSearchService: Send + Sync {
    /// Run a web search and return normalized hits in source order
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>>;
}

// =============================================================================
// Encyclopedia Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseEncyclopediaService: Send + Sync {
    /// Look up a topic summary; Ok(None) when no page exists
    async fn summary(&self, topic: &str) -> Result<Option<EncyclopediaSummary>>;
}

// =============================================================================
// Translation Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseTranslationService: Send + Sync {
    /// Detect the ISO 639-1 language code of a text ("en" on any doubt)
    async fn detect_language(&self, text: &str) -> Result<String>;

    /// Translate text into the target language
    async fn translate(&self, text: &str, target: &str) -> Result<String>;
}

// =============================================================================
// Vision / OCR Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseVisionService: Send + Sync {
    /// Extract text from a base64-encoded image. Empty string when the
    /// image carries no recognizable text.
    async fn extract_text(&self, image_base64: &str) -> Result<String>;
}

// =============================================================================
// URL Safety Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseUrlSafetyService: Send + Sync {
    /// Check a URL against known threat lists
    async fn check(&self, url: &str) -> Result<UrlSafetyReport>;
}

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete a prompt expecting JSON response (returns raw JSON string)
    /// Parse with serde_json::from_str in calling code
    async fn complete_json(&self, prompt: &str) -> Result<String> {
        // Default implementation calls complete
        self.complete(prompt).await
    }
}

// =============================================================================
// Page Fetcher Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Fetch a page and return its visible text, markup stripped and
    /// truncated to a fixed character budget
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
