// TestDependencies - mock implementations for testing
//
// Provides mock adapters that can be injected into the pipeline for
// tests. Each mock supports queued responses, call recording, and
// failure/delay injection.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{
    BaseAI, BaseEncyclopediaService, BaseFactCheckService, BasePageFetcher, BaseSearchService,
    BaseTranslationService, BaseUrlSafetyService, BaseVisionService, ClaimReview,
    EncyclopediaSummary, FactCheckClaim, SearchResult, ServerDeps, UrlSafetyReport,
};

// =============================================================================
// Mock Fact-Check Service
// =============================================================================

#[derive(Default)]
pub struct MockFactCheckService {
    claims: Mutex<Vec<FactCheckClaim>>,
    calls: Mutex<Vec<String>>,
    fail: Mutex<bool>,
    delay: Mutex<Option<Duration>>,
}

impl MockFactCheckService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a fact-check claim with a single review
    pub fn add_claim(&self, publisher: &str, rating: &str, url: &str) {
        self.claims.lock().unwrap().push(FactCheckClaim {
            text: "queued claim".to_string(),
            reviews: vec![ClaimReview {
                publisher: publisher.to_string(),
                rating: rating.to_string(),
                url: url.to_string(),
            }],
        });
    }

    pub fn set_failing(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Make every call sleep before answering (for timeout tests)
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseFactCheckService for MockFactCheckService {
    async fn search(&self, query: &str, _limit: usize) -> Result<Vec<FactCheckClaim>> {
        self.calls.lock().unwrap().push(query.to_string());
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.fail.lock().unwrap() {
            anyhow::bail!("mock fact-check failure");
        }
        Ok(self.claims.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Web Search Service
// =============================================================================

#[derive(Default)]
pub struct MockSearchService {
    results: Mutex<Vec<SearchResult>>,
    calls: Mutex<Vec<String>>,
    fail: Mutex<bool>,
    delay: Mutex<Option<Duration>>,
}

impl MockSearchService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&self, title: &str, link: &str, snippet: &str) {
        self.results.lock().unwrap().push(SearchResult {
            title: title.to_string(),
            link: link.to_string(),
            snippet: snippet.to_string(),
        });
    }

    pub fn set_failing(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseSearchService for MockSearchService {
    async fn search(&self, query: &str, _limit: usize) -> Result<Vec<SearchResult>> {
        self.calls.lock().unwrap().push(query.to_string());
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.fail.lock().unwrap() {
            anyhow::bail!("mock search failure");
        }
        Ok(self.results.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Encyclopedia Service
// =============================================================================

#[derive(Default)]
pub struct MockEncyclopediaService {
    summary: Mutex<Option<EncyclopediaSummary>>,
    fail: Mutex<bool>,
}

impl MockEncyclopediaService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_summary(&self, title: &str, extract: &str, url: &str) {
        *self.summary.lock().unwrap() = Some(EncyclopediaSummary {
            title: title.to_string(),
            extract: extract.to_string(),
            url: url.to_string(),
        });
    }

    pub fn set_failing(&self) {
        *self.fail.lock().unwrap() = true;
    }
}

#[async_trait]
impl BaseEncyclopediaService for MockEncyclopediaService {
    async fn summary(&self, _topic: &str) -> Result<Option<EncyclopediaSummary>> {
        if *self.fail.lock().unwrap() {
            anyhow::bail!("mock encyclopedia failure");
        }
        Ok(self.summary.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Translation Service
// =============================================================================

pub struct MockTranslationService {
    language: Mutex<String>,
}

impl MockTranslationService {
    pub fn new() -> Self {
        Self {
            language: Mutex::new("en".to_string()),
        }
    }

    pub fn set_language(&self, language: &str) {
        *self.language.lock().unwrap() = language.to_string();
    }
}

#[async_trait]
impl BaseTranslationService for MockTranslationService {
    async fn detect_language(&self, _text: &str) -> Result<String> {
        Ok(self.language.lock().unwrap().clone())
    }

    async fn translate(&self, text: &str, _target: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

// =============================================================================
// Mock Vision Service
// =============================================================================

#[derive(Default)]
pub struct MockVisionService {
    text: Mutex<String>,
    calls: Mutex<Vec<String>>,
}

impl MockVisionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseVisionService for MockVisionService {
    async fn extract_text(&self, image_base64: &str) -> Result<String> {
        self.calls.lock().unwrap().push(image_base64.to_string());
        Ok(self.text.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock URL Safety Service
// =============================================================================

#[derive(Default)]
pub struct MockUrlSafetyService {
    threats: Mutex<Vec<String>>,
}

impl MockUrlSafetyService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_threat(&self, threat_type: &str) {
        self.threats.lock().unwrap().push(threat_type.to_string());
    }
}

#[async_trait]
impl BaseUrlSafetyService for MockUrlSafetyService {
    async fn check(&self, _url: &str) -> Result<UrlSafetyReport> {
        Ok(UrlSafetyReport {
            threats: self.threats.lock().unwrap().clone(),
        })
    }
}

// =============================================================================
// Mock AI
// =============================================================================

#[derive(Default)]
pub struct MockAI {
    response: Mutex<String>,
    calls: Mutex<Vec<String>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, response: &str) {
        *self.response.lock().unwrap() = response.to_string();
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());
        Ok(self.response.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Page Fetcher
// =============================================================================

#[derive(Default)]
pub struct MockPageFetcher {
    text: Mutex<Option<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = Some(text.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.text.lock().unwrap().clone() {
            Some(text) => Ok(text),
            None => anyhow::bail!("mock fetch failure for {}", url),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mock adapters plus a `ServerDeps` view over them.
///
/// Tests hold on to the concrete mocks (to queue responses and inspect
/// calls) while the pipeline sees only the trait objects.
pub struct TestDependencies {
    pub fact_check: Arc<MockFactCheckService>,
    pub web_search: Arc<MockSearchService>,
    pub encyclopedia: Arc<MockEncyclopediaService>,
    pub translation: Arc<MockTranslationService>,
    pub vision: Arc<MockVisionService>,
    pub url_safety: Arc<MockUrlSafetyService>,
    pub ai: Arc<MockAI>,
    pub page_fetcher: Arc<MockPageFetcher>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            fact_check: Arc::new(MockFactCheckService::new()),
            web_search: Arc::new(MockSearchService::new()),
            encyclopedia: Arc::new(MockEncyclopediaService::new()),
            translation: Arc::new(MockTranslationService::new()),
            vision: Arc::new(MockVisionService::new()),
            url_safety: Arc::new(MockUrlSafetyService::new()),
            ai: Arc::new(MockAI::new()),
            page_fetcher: Arc::new(MockPageFetcher::new()),
        }
    }

    pub fn deps(&self) -> ServerDeps {
        ServerDeps {
            fact_check: self.fact_check.clone(),
            web_search: self.web_search.clone(),
            encyclopedia: self.encyclopedia.clone(),
            translation: self.translation.clone(),
            vision: self.vision.clone(),
            url_safety: self.url_safety.clone(),
            ai: self.ai.clone(),
            page_fetcher: self.page_fetcher.clone(),
        }
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
