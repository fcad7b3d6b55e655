// End-to-end pipeline tests over mocked adapters.
//
// These exercise the full route from submitted content to assembled
// report, asserting the structural guarantees every report carries and
// the degradation behavior for failing or slow adapters.

use std::time::{Duration, Instant};

use server_core::domains::analysis::{
    AnalysisError, AnalysisPipeline, AnalysisResult, ContentType, VerdictLabel,
};
use server_core::kernel::{PipelineTimeouts, TestDependencies};

fn pipeline(test_deps: &TestDependencies) -> AnalysisPipeline {
    AnalysisPipeline::new(test_deps.deps(), PipelineTimeouts::default())
}

fn assert_report_invariants(result: &AnalysisResult) {
    assert!(result.verdict.confidence <= 100);
    let b = &result.verdict.breakdown;
    for v in [
        b.fact_checks,
        b.source_credibility,
        b.model_consensus,
        b.technical_feasibility,
        b.cross_media,
    ] {
        assert!(v <= 100);
    }
    assert!(
        result.evidence.len() >= 3 && result.evidence.len() <= 5,
        "evidence grid had {} items",
        result.evidence.len()
    );
    assert_eq!(result.checklist.len(), 3);
    assert!(!result.id.is_empty());
    assert!(!result.explanation.is_empty());
    for evidence in &result.evidence {
        assert!((0.0..=1.0).contains(&evidence.reliability));
    }
}

#[tokio::test]
async fn well_evidenced_false_claim_gets_false_verdict() {
    let test_deps = TestDependencies::new();
    test_deps
        .fact_check
        .add_claim("Reuters Fact Check", "False", "https://reuters.com/fc/1");
    test_deps.web_search.add_result(
        "COVID-19 vaccine facts",
        "https://www.cdc.gov/vaccines/covid",
        "Vaccines do not contain microchips or tracking devices.",
    );
    test_deps.encyclopedia.set_summary(
        "COVID-19 vaccine",
        "COVID-19 vaccines are intended to provide acquired immunity.",
        "https://en.wikipedia.org/wiki/COVID-19_vaccine",
    );

    let result = pipeline(&test_deps)
        .run_analysis(
            ContentType::Text,
            "COVID vaccines contain microchips for tracking people",
            None,
        )
        .await
        .unwrap();

    assert_report_invariants(&result);
    assert_eq!(result.verdict.label, VerdictLabel::False);
    assert!(result.verdict.confidence >= 85);
    assert_eq!(result.domain, "Health & Medical");
    assert_eq!(result.audit["claim_type"], "vaccine_conspiracy");
    // Fact-check evidence leads the grid
    assert!(result.evidence[0].source.starts_with("Reuters Fact Check"));
}

#[tokio::test]
async fn all_adapters_unavailable_still_yields_complete_report() {
    let test_deps = TestDependencies::new();
    test_deps.fact_check.set_failing();
    test_deps.web_search.set_failing();
    test_deps.encyclopedia.set_failing();

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Text, "some unverifiable claim", None)
        .await
        .unwrap();

    assert_report_invariants(&result);
    assert_eq!(result.verdict.label, VerdictLabel::Caution);
    assert_eq!(result.verdict.confidence, 40);
    assert!(result.verdict.summary.contains("Limited verification"));
    // The fallback grid is the authoritative trio
    assert_eq!(result.evidence.len(), 3);
    assert!(result.evidence[0].source.contains("World Health Organization"));
}

#[tokio::test]
async fn slow_adapters_do_not_stall_the_request() {
    let test_deps = TestDependencies::new();
    test_deps.fact_check.set_delay(Duration::from_secs(60));
    test_deps.web_search.add_result(
        "Result",
        "https://example.org/a",
        "Some context for the claim.",
    );

    let timeouts = PipelineTimeouts {
        fact_check: Duration::from_millis(100),
        ..Default::default()
    };
    let pipeline = AnalysisPipeline::new(test_deps.deps(), timeouts);

    let started = Instant::now();
    let result = pipeline
        .run_analysis(ContentType::Text, "an ordinary claim", None)
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_report_invariants(&result);
    // The timed-out source contributed nothing
    assert_eq!(result.audit["fact_check_count"], 0);
    assert_eq!(result.audit["search_result_count"], 1);
}

#[tokio::test]
async fn empty_submission_is_the_only_hard_error() {
    let test_deps = TestDependencies::new();
    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Text, "", None)
        .await;
    assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Url, "  \n ", None)
        .await;
    assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
}

#[tokio::test]
async fn unreachable_url_degrades_to_caution_report() {
    let test_deps = TestDependencies::new();
    // No page text queued: the fetch fails

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Url, "https://unreachable.example/article", None)
        .await
        .unwrap();

    assert_report_invariants(&result);
    assert_eq!(result.verdict.label, VerdictLabel::Caution);
    assert_eq!(result.verdict.confidence, 50);
    assert_eq!(result.audit["url_fetch_failed"], true);
    assert_eq!(result.input, "https://unreachable.example/article");
    // No content reached the text pipeline
    assert!(test_deps.fact_check.calls().is_empty());
    assert!(test_deps.web_search.calls().is_empty());
}

#[tokio::test]
async fn fetched_page_content_is_analyzed_as_text() {
    let test_deps = TestDependencies::new();
    test_deps
        .page_fetcher
        .set_text("The election was rigged and the vote count was fraudulent.");

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Url, "https://example.org/post", None)
        .await
        .unwrap();

    assert_report_invariants(&result);
    assert_eq!(result.domain, "Web Content");
    assert_eq!(result.audit["claim_type"], "election_misinformation");
    assert_eq!(result.audit["url_analyzed"], "https://example.org/post");
    assert_eq!(result.input, "https://example.org/post");
    assert_eq!(test_deps.page_fetcher.calls().len(), 1);
}

#[tokio::test]
async fn flagged_url_verdict_is_capped_at_caution() {
    let test_deps = TestDependencies::new();
    test_deps
        .page_fetcher
        .set_text("Perfectly reasonable article content about vaccines being safe.");
    test_deps.url_safety.add_threat("MALWARE");
    // Strong evidence that would otherwise verify the content
    test_deps
        .fact_check
        .add_claim("Reuters Fact Check", "Accurate", "https://reuters.com/fc/2");
    test_deps.web_search.add_result(
        "WHO vaccine safety",
        "https://who.int/vaccine-safety",
        "Vaccines are rigorously tested.",
    );

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Url, "https://malware.example/page", None)
        .await
        .unwrap();

    assert_report_invariants(&result);
    assert_eq!(result.verdict.label, VerdictLabel::Caution);
    assert!(result.verdict.summary.contains("Security warning"));
    assert_eq!(result.audit["security_warning"][0], "MALWARE");
}

#[tokio::test]
async fn image_with_readable_text_runs_the_full_pipeline() {
    let test_deps = TestDependencies::new();
    test_deps
        .vision
        .set_text("Breaking: the stock market will crash tomorrow");

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Image, "c29tZSBpbWFnZQ==", None)
        .await
        .unwrap();

    assert_report_invariants(&result);
    assert_eq!(result.domain, "Visual Content");
    assert_eq!(result.audit["claim_type"], "financial_misinformation");
    assert_eq!(test_deps.vision.calls().len(), 1);
    assert_eq!(test_deps.fact_check.calls().len(), 1);
}

#[tokio::test]
async fn image_without_text_gets_visual_verification_guidance() {
    let test_deps = TestDependencies::new();
    // OCR returns an empty string by default

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Image, "c29tZSBpbWFnZQ==", None)
        .await
        .unwrap();

    assert_report_invariants(&result);
    assert_eq!(result.verdict.label, VerdictLabel::Caution);
    assert_eq!(result.verdict.confidence, 40);
    assert_eq!(result.audit["ocr_empty"], true);
    assert!(result.checklist.iter().any(|c| c.point.contains("reverse image search")));
    // The text pipeline never fired
    assert!(test_deps.fact_check.calls().is_empty());
    assert!(test_deps.web_search.calls().is_empty());
    assert!(test_deps.ai.calls().is_empty());
}

#[tokio::test]
async fn detected_language_is_recorded_in_the_audit_trail() {
    let test_deps = TestDependencies::new();
    test_deps.translation.set_language("de");

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Text, "Impfstoffe enthalten Mikrochips", None)
        .await
        .unwrap();

    assert_eq!(result.audit["detected_language"], "de");
    assert_report_invariants(&result);
}

#[tokio::test]
async fn caller_supplied_language_skips_detection() {
    let test_deps = TestDependencies::new();

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Text, "a claim in english", Some("en"))
        .await
        .unwrap();

    assert_eq!(result.audit["detected_language"], "en");
}

#[tokio::test]
async fn report_serializes_with_the_wire_contract() {
    let test_deps = TestDependencies::new();
    test_deps
        .fact_check
        .add_claim("Reuters Fact Check", "False", "https://reuters.com/fc/1");
    test_deps.web_search.add_result(
        "CDC guidance",
        "https://www.cdc.gov/page",
        "Official guidance on the topic.",
    );

    let result = pipeline(&test_deps)
        .run_analysis(ContentType::Text, "vaccines contain microchips", None)
        .await
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["verdict"]["label"], "❌ False");
    assert!(value["verdict"]["breakdown"]["factChecks"].is_u64());
    assert!(value["verdict"]["breakdown"]["sourceCredibility"].is_u64());
    assert!(value["verdict"]["breakdown"]["crossMedia"].is_u64());
    assert!(value["audit"]["model_version"]
        .as_str()
        .unwrap()
        .contains("CrediScope"));
}
