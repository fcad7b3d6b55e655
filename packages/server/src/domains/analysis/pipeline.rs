//! Analysis pipeline: content-type routing and end-to-end orchestration.
//!
//! One pipeline instance serves all requests. Every path returns a full
//! `AnalysisResult`; degraded outcomes (timeout, internal error, failed
//! fetch, unreadable image) are rendered as reports with a warning
//! verdict rather than surfaced as errors. The only error a caller ever
//! sees is `AnalysisError::InvalidInput`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, warn};

use super::models::{
    AnalysisResult, Category, ConfidenceBreakdown, Verdict, VerdictLabel,
};
use super::{aggregator, assembler, classifier, synthesizer};
use crate::kernel::{PipelineTimeouts, ServerDeps};

const MODEL_VERSION: &str = "CrediScope Professional v2.0";

/// What kind of content the caller submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Url,
    Image,
}

/// The only error surfaced to callers. Everything downstream of input
/// validation degrades into a warning-verdict report instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

pub struct AnalysisPipeline {
    deps: ServerDeps,
    timeouts: PipelineTimeouts,
}

impl AnalysisPipeline {
    pub fn new(deps: ServerDeps, timeouts: PipelineTimeouts) -> Self {
        Self { deps, timeouts }
    }

    /// Run a full analysis for one submission.
    pub async fn run_analysis(
        &self,
        content_type: ContentType,
        content: &str,
        language: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AnalysisError::InvalidInput("content must not be empty"));
        }

        let budget = match content_type {
            ContentType::Text => self.timeouts.text_pipeline,
            ContentType::Url => self.timeouts.url_pipeline,
            ContentType::Image => self.timeouts.image_pipeline,
        };

        let work = async {
            match content_type {
                ContentType::Text => self.analyze_text(content, language, None, Map::new()).await,
                ContentType::Url => self.analyze_url(content, language).await,
                ContentType::Image => self.analyze_image(content, language).await,
            }
        };

        match timeout(budget, work).await {
            Ok(Ok(result)) => {
                info!(
                    id = %result.id,
                    verdict = %result.verdict.label,
                    confidence = result.verdict.confidence,
                    "Analysis completed"
                );
                Ok(result)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Analysis failed internally");
                Ok(self.error_result(content, &e.to_string()))
            }
            Err(_) => {
                warn!(budget_secs = budget.as_secs(), "Analysis exceeded its time budget");
                Ok(self.timeout_result(content))
            }
        }
    }

    /// Text path: language normalization, classification, evidence
    /// gathering, synthesis, and narrative assembly.
    async fn analyze_text(
        &self,
        content: &str,
        language: Option<&str>,
        domain_override: Option<&str>,
        mut audit: Map<String, Value>,
    ) -> anyhow::Result<AnalysisResult> {
        let started = std::time::Instant::now();

        // Language detection and translation are best-effort; any failure
        // means we analyze the text as submitted.
        let detected = match language {
            Some(code) => code.to_string(),
            None => match timeout(
                self.timeouts.language_detect,
                self.deps.translation.detect_language(content),
            )
            .await
            {
                Ok(Ok(code)) => code,
                Ok(Err(e)) => {
                    warn!(error = %e, "Language detection unavailable");
                    "en".to_string()
                }
                Err(_) => {
                    warn!("Language detection timed out");
                    "en".to_string()
                }
            },
        };

        let analysis_text = if detected != "en" {
            match timeout(
                self.timeouts.translate,
                self.deps.translation.translate(content, "en"),
            )
            .await
            {
                Ok(Ok(translated)) => translated,
                Ok(Err(e)) => {
                    warn!(error = %e, "Translation unavailable, analyzing original text");
                    content.to_string()
                }
                Err(_) => {
                    warn!("Translation timed out, analyzing original text");
                    content.to_string()
                }
            }
        } else {
            content.to_string()
        };

        let category = classifier::classify(&analysis_text);
        let bundle = aggregator::gather(&self.deps, &analysis_text, &self.timeouts).await;

        // LLM assessment is advisory only: it lands in the audit trail and
        // never moves the verdict.
        match timeout(self.timeouts.llm, self.deps.ai.complete_json(&llm_prompt(&analysis_text)))
            .await
        {
            Ok(Ok(hint)) if !hint.trim().is_empty() => {
                audit.insert("model_hint".to_string(), json!(hint));
            }
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!(error = %e, "LLM assessment unavailable"),
            Err(_) => warn!("LLM assessment timed out"),
        }

        let verdict = synthesizer::synthesize(&bundle, category);
        let explanation = assembler::explanation(
            category,
            bundle.fact_checks.len(),
            bundle.search_results.len(),
        );
        let evidence = assembler::evidence_grid(&bundle);
        let checklist = assembler::checklist(category);
        let intelligence = assembler::intelligence(category);

        audit.insert("analysis_time".to_string(), json!(chrono::Utc::now().to_rfc3339()));
        audit.insert(
            "processing_time".to_string(),
            json!(started.elapsed().as_millis() as f64 / 1000.0),
        );
        audit.insert("detected_language".to_string(), json!(detected));
        audit.insert("claim_type".to_string(), json!(category.as_str()));
        audit.insert("fact_check_count".to_string(), json!(bundle.fact_checks.len()));
        audit.insert("search_result_count".to_string(), json!(bundle.search_results.len()));
        audit.insert(
            "evidence_score".to_string(),
            json!(synthesizer::evidence_score(&bundle)),
        );
        audit.insert("model_version".to_string(), json!(MODEL_VERSION));

        Ok(AnalysisResult {
            id: AnalysisResult::new_id(),
            input: content.to_string(),
            domain: domain_override
                .map(str::to_string)
                .unwrap_or_else(|| category.domain_label().to_string()),
            verdict,
            explanation,
            evidence,
            checklist,
            intelligence,
            audit,
        })
    }

    /// URL path: fetch the page and check the URL against threat lists in
    /// parallel, then run the text path over the extracted content.
    async fn analyze_url(
        &self,
        url: &str,
        language: Option<&str>,
    ) -> anyhow::Result<AnalysisResult> {
        let (page, safety) = tokio::join!(
            timeout(self.timeouts.page_fetch, self.deps.page_fetcher.fetch_text(url)),
            timeout(self.timeouts.url_safety, self.deps.url_safety.check(url)),
        );

        let threats = match safety {
            Ok(Ok(report)) => report.threats,
            Ok(Err(e)) => {
                warn!(error = %e, "URL safety check unavailable");
                vec![]
            }
            Err(_) => {
                warn!("URL safety check timed out");
                vec![]
            }
        };

        let page_text = match page {
            Ok(Ok(text)) if !text.trim().is_empty() => text,
            Ok(Ok(_)) | Ok(Err(_)) | Err(_) => {
                warn!(url, "Page fetch failed or returned no text");
                return Ok(self.fetch_failure_result(url, &threats));
            }
        };

        let mut audit = Map::new();
        audit.insert("url_analyzed".to_string(), json!(url));

        let mut result = self
            .analyze_text(&page_text, language, Some("Web Content"), audit)
            .await?;
        result.input = url.to_string();

        // A flagged URL caps the verdict at Caution no matter what the
        // page content scored.
        if !threats.is_empty() {
            result.verdict.label = VerdictLabel::Caution;
            result.verdict.confidence /= 2;
            result.verdict.summary = format!(
                "Security warning: this URL is flagged ({}). Content analysis is secondary to \
                 the safety concern.",
                threats.join(", ")
            );
            result
                .audit
                .insert("security_warning".to_string(), json!(threats));
        }

        Ok(result)
    }

    /// Image path: OCR the image and run the text path over whatever was
    /// read. An unreadable image gets a visual-verification report.
    async fn analyze_image(
        &self,
        image_base64: &str,
        language: Option<&str>,
    ) -> anyhow::Result<AnalysisResult> {
        let extracted = match self.deps.vision.extract_text(image_base64).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "OCR unavailable");
                String::new()
            }
        };

        if extracted.trim().is_empty() {
            return Ok(self.visual_only_result());
        }

        let mut audit = Map::new();
        audit.insert("extracted_text".to_string(), json!(extracted.clone()));

        let mut result = self
            .analyze_text(&extracted, language, Some("Visual Content"), audit)
            .await?;
        result.input = "[image submission]".to_string();
        Ok(result)
    }

    /// Report for an image with no readable text. The text pipeline is
    /// never invoked; the checklist teaches visual verification instead.
    fn visual_only_result(&self) -> AnalysisResult {
        let mut audit = Map::new();
        audit.insert("analysis_time".to_string(), json!(chrono::Utc::now().to_rfc3339()));
        audit.insert("ocr_empty".to_string(), json!(true));
        audit.insert("model_version".to_string(), json!(MODEL_VERSION));

        AnalysisResult {
            id: AnalysisResult::new_id(),
            input: "[image submission]".to_string(),
            domain: "Visual Content".to_string(),
            verdict: Verdict {
                label: VerdictLabel::Caution,
                confidence: 40,
                summary: "No readable text found in the image. Visual claims require manual \
                          verification."
                    .to_string(),
                breakdown: degraded_breakdown(40),
            },
            explanation: "This image contains no machine-readable text, so the claim it carries \
                          could not be checked against fact-checking databases or web sources. \
                          Images are a common vehicle for misinformation precisely because \
                          their content resists automated verification. Treat any claim made \
                          through this image with caution until it can be verified manually."
                .to_string(),
            evidence: assembler::evidence_grid(&Default::default()),
            checklist: vec![
                super::models::ChecklistItem {
                    point: "Run a reverse image search".to_string(),
                    explanation: "Search engines can locate earlier uses of the same image, \
                                  revealing whether it is recycled from an unrelated event."
                        .to_string(),
                },
                super::models::ChecklistItem {
                    point: "Inspect the image metadata".to_string(),
                    explanation: "Creation dates, editing software traces, and location data \
                                  can contradict the story the image is attached to."
                        .to_string(),
                },
                super::models::ChecklistItem {
                    point: "Check the surrounding context".to_string(),
                    explanation: "Who shared the image, when, and with what caption matters as \
                                  much as the image itself."
                        .to_string(),
                },
            ],
            intelligence: assembler::intelligence(Category::GeneralMisinformation),
            audit,
        }
    }

    /// Report for a URL whose page could not be fetched. A threat flag
    /// from the safety check is still recorded and halves the confidence.
    fn fetch_failure_result(&self, url: &str, threats: &[String]) -> AnalysisResult {
        let mut audit = Map::new();
        audit.insert("analysis_time".to_string(), json!(chrono::Utc::now().to_rfc3339()));
        audit.insert("url_analyzed".to_string(), json!(url));
        audit.insert("url_fetch_failed".to_string(), json!(true));
        audit.insert("model_version".to_string(), json!(MODEL_VERSION));

        let (confidence, summary) = if threats.is_empty() {
            (
                50,
                "The page could not be retrieved, so its content was not analyzed. Verify the \
                 claim through the sources below."
                    .to_string(),
            )
        } else {
            audit.insert("security_warning".to_string(), json!(threats));
            (
                25,
                format!(
                    "Security warning: this URL is flagged ({}). The page could not be \
                     retrieved, so its content was not analyzed.",
                    threats.join(", ")
                ),
            )
        };

        AnalysisResult {
            id: AnalysisResult::new_id(),
            input: url.to_string(),
            domain: "Web Content".to_string(),
            verdict: Verdict {
                label: VerdictLabel::Caution,
                confidence,
                summary,
                breakdown: degraded_breakdown(confidence),
            },
            explanation: "The submitted URL did not return readable content. This can mean the \
                          page is gone, blocks automated access, or requires a login. None of \
                          those outcomes says anything about the truth of the claim the page \
                          makes, so no verdict on the content itself is possible. Use the \
                          authoritative sources listed here to check the claim directly."
                .to_string(),
            evidence: assembler::evidence_grid(&Default::default()),
            checklist: assembler::checklist(Category::GeneralMisinformation),
            intelligence: assembler::intelligence(Category::GeneralMisinformation),
            audit,
        }
    }

    /// Report for a request that exceeded its outer time budget.
    fn timeout_result(&self, content: &str) -> AnalysisResult {
        let mut audit = Map::new();
        audit.insert("analysis_time".to_string(), json!(chrono::Utc::now().to_rfc3339()));
        audit.insert("timed_out".to_string(), json!(true));
        audit.insert("model_version".to_string(), json!(MODEL_VERSION));

        AnalysisResult {
            id: AnalysisResult::new_id(),
            input: content.to_string(),
            domain: "General Information".to_string(),
            verdict: Verdict {
                label: VerdictLabel::Timeout,
                confidence: 20,
                summary: "Analysis timed out before completion. Treat the claim as unverified."
                    .to_string(),
                breakdown: degraded_breakdown(20),
            },
            explanation: "The analysis could not be completed within the allotted time, usually \
                          because external verification services were slow to respond. No \
                          conclusion about the claim should be drawn from this. Retry the \
                          analysis, or verify the claim manually through the sources listed."
                .to_string(),
            evidence: assembler::evidence_grid(&Default::default()),
            checklist: assembler::checklist(Category::GeneralMisinformation),
            intelligence: assembler::intelligence(Category::GeneralMisinformation),
            audit,
        }
    }

    /// Report for an unexpected internal failure.
    fn error_result(&self, content: &str, error: &str) -> AnalysisResult {
        let mut audit = Map::new();
        audit.insert("analysis_time".to_string(), json!(chrono::Utc::now().to_rfc3339()));
        audit.insert("error".to_string(), json!(error));
        audit.insert("model_version".to_string(), json!(MODEL_VERSION));

        AnalysisResult {
            id: AnalysisResult::new_id(),
            input: content.to_string(),
            domain: "General Information".to_string(),
            verdict: Verdict {
                label: VerdictLabel::Error,
                confidence: 10,
                summary: "Analysis failed unexpectedly. Treat the claim as unverified."
                    .to_string(),
                breakdown: degraded_breakdown(10),
            },
            explanation: "An internal error interrupted the analysis before a verdict could be \
                          reached. This says nothing about the truth of the claim. Retry the \
                          analysis, or verify the claim manually through the sources listed."
                .to_string(),
            evidence: assembler::evidence_grid(&Default::default()),
            checklist: assembler::checklist(Category::GeneralMisinformation),
            intelligence: assembler::intelligence(Category::GeneralMisinformation),
            audit,
        }
    }
}

fn llm_prompt(text: &str) -> String {
    format!(
        "Assess the following claim for misinformation indicators. Respond with a JSON object \
         containing \"assessment\" (one short sentence) and \"confidence\" (0-100).\n\n\
         Claim: {}",
        text
    )
}

/// Breakdown for degraded reports: base sub-scores with model consensus
/// tracking the (clamped) confidence.
fn degraded_breakdown(confidence: u8) -> ConfidenceBreakdown {
    ConfidenceBreakdown {
        fact_checks: 50,
        source_credibility: 40,
        model_consensus: (confidence as u32).clamp(30, 95) as u8,
        technical_feasibility: 60,
        cross_media: 40,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::TestDependencies;

    fn pipeline(test_deps: &TestDependencies) -> AnalysisPipeline {
        AnalysisPipeline::new(test_deps.deps(), PipelineTimeouts::default())
    }

    #[tokio::test]
    async fn empty_content_is_rejected_before_any_adapter_call() {
        let test_deps = TestDependencies::new();
        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Text, "   ", None)
            .await;
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
        assert!(test_deps.fact_check.calls().is_empty());
    }

    #[tokio::test]
    async fn text_result_satisfies_structural_invariants() {
        let test_deps = TestDependencies::new();
        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Text, "the moon is made of cheese", None)
            .await
            .unwrap();

        assert!(result.verdict.confidence <= 100);
        assert!(result.evidence.len() >= 3 && result.evidence.len() <= 5);
        assert_eq!(result.checklist.len(), 3);
        assert_eq!(result.audit["claim_type"], "general_misinformation");
        assert_eq!(result.audit["model_version"], MODEL_VERSION);
    }

    #[tokio::test]
    async fn non_english_text_is_translated_before_classification() {
        let test_deps = TestDependencies::new();
        test_deps.translation.set_language("es");
        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Text, "las vacunas contienen microchips", None)
            .await
            .unwrap();
        assert_eq!(result.audit["detected_language"], "es");
    }

    #[tokio::test]
    async fn flagged_url_is_capped_at_caution() {
        let test_deps = TestDependencies::new();
        test_deps.page_fetcher.set_text(
            "Official fact check: vaccines are safe and effective according to WHO and CDC.",
        );
        test_deps.url_safety.add_threat("SOCIAL_ENGINEERING");

        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Url, "https://phishing.example/post", None)
            .await
            .unwrap();

        assert_eq!(result.verdict.label, VerdictLabel::Caution);
        assert_eq!(result.audit["security_warning"][0], "SOCIAL_ENGINEERING");
        assert_eq!(result.domain, "Web Content");
    }

    #[tokio::test]
    async fn failed_fetch_yields_caution_report_not_error() {
        let test_deps = TestDependencies::new();
        // No page text queued: the mock fetcher fails

        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Url, "https://gone.example/404", None)
            .await
            .unwrap();

        assert_eq!(result.verdict.label, VerdictLabel::Caution);
        assert_eq!(result.verdict.confidence, 50);
        assert_eq!(result.audit["url_fetch_failed"], true);
        assert_eq!(result.evidence.len(), 3);
        // The text pipeline never ran
        assert!(test_deps.fact_check.calls().is_empty());
    }

    #[tokio::test]
    async fn flagged_but_unfetchable_url_still_reports_the_threat() {
        let test_deps = TestDependencies::new();
        // No page text queued: the mock fetcher fails
        test_deps.url_safety.add_threat("MALWARE");

        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Url, "https://malware.example/gone", None)
            .await
            .unwrap();

        assert_eq!(result.verdict.label, VerdictLabel::Caution);
        assert_eq!(result.verdict.confidence, 25);
        assert_eq!(result.audit["url_fetch_failed"], true);
        assert_eq!(result.audit["security_warning"][0], "MALWARE");
        assert!(result.verdict.summary.contains("Security warning"));
    }

    #[tokio::test]
    async fn unreadable_image_skips_the_text_pipeline() {
        let test_deps = TestDependencies::new();
        // OCR returns empty text by default

        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Image, "aGVsbG8=", None)
            .await
            .unwrap();

        assert_eq!(result.verdict.label, VerdictLabel::Caution);
        assert_eq!(result.verdict.confidence, 40);
        assert_eq!(result.domain, "Visual Content");
        assert_eq!(result.checklist.len(), 3);
        assert!(result.checklist[0].point.contains("reverse image search"));
        assert!(test_deps.fact_check.calls().is_empty());
        assert!(test_deps.web_search.calls().is_empty());
    }

    #[tokio::test]
    async fn readable_image_flows_through_the_text_pipeline() {
        let test_deps = TestDependencies::new();
        test_deps.vision.set_text("vaccines contain microchips");

        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Image, "aGVsbG8=", None)
            .await
            .unwrap();

        assert_eq!(result.domain, "Visual Content");
        assert_eq!(result.verdict.label, VerdictLabel::False);
        assert_eq!(result.audit["claim_type"], "vaccine_conspiracy");
        assert_eq!(test_deps.fact_check.calls().len(), 1);
    }

    #[tokio::test]
    async fn llm_hint_lands_in_audit_without_moving_the_verdict() {
        let test_deps = TestDependencies::new();
        test_deps
            .ai
            .set_response(r#"{"assessment": "likely false", "confidence": 99}"#);

        let result = pipeline(&test_deps)
            .run_analysis(ContentType::Text, "an unremarkable claim", None)
            .await
            .unwrap();

        assert!(result.audit["model_hint"].as_str().unwrap().contains("likely false"));
        // Empty evidence keeps the verdict in the lowest band regardless
        assert_eq!(result.verdict.confidence, 40);
    }
}
