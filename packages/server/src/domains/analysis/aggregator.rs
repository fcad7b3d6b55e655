//! Evidence aggregator: fan out to the evidence adapters, fan back in.
//!
//! `gather` fires all evidence sources concurrently, each under its own
//! timeout, and returns a bundle of whatever completed. A timed-out or
//! failed adapter leaves its slot empty; the aggregator itself never
//! fails, and an all-empty bundle is a valid outcome the synthesizer
//! handles as the low-evidence branch.

use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::models::EvidenceBundle;
use crate::kernel::{PipelineTimeouts, ServerDeps};

/// How many records to request from each list-returning adapter
const PER_SOURCE_LIMIT: usize = 5;

/// Gather evidence for a claim from all configured sources.
pub async fn gather(deps: &ServerDeps, query: &str, timeouts: &PipelineTimeouts) -> EvidenceBundle {
    let started = Instant::now();

    let (fact_checks, search_results, encyclopedia) = tokio::join!(
        timeout(timeouts.fact_check, deps.fact_check.search(query, PER_SOURCE_LIMIT)),
        timeout(timeouts.web_search, deps.web_search.search(query, PER_SOURCE_LIMIT)),
        timeout(timeouts.encyclopedia, deps.encyclopedia.summary(query)),
    );

    let fact_checks = match fact_checks {
        Ok(Ok(claims)) => claims,
        Ok(Err(e)) => {
            warn!(error = %e, "Fact-check adapter unavailable");
            vec![]
        }
        Err(_) => {
            warn!("Fact-check adapter timed out");
            vec![]
        }
    };

    let search_results = match search_results {
        Ok(Ok(results)) => results,
        Ok(Err(e)) => {
            warn!(error = %e, "Web search adapter unavailable");
            vec![]
        }
        Err(_) => {
            warn!("Web search adapter timed out");
            vec![]
        }
    };

    let encyclopedia = match encyclopedia {
        Ok(Ok(summary)) => summary,
        Ok(Err(e)) => {
            warn!(error = %e, "Encyclopedia adapter unavailable");
            None
        }
        Err(_) => {
            warn!("Encyclopedia adapter timed out");
            None
        }
    };

    let bundle = EvidenceBundle {
        fact_checks,
        search_results,
        encyclopedia,
    };

    debug!(
        fact_checks = bundle.fact_checks.len(),
        search_results = bundle.search_results.len(),
        encyclopedia = bundle.encyclopedia.is_some(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Evidence gathering completed"
    );

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::TestDependencies;
    use std::time::Duration;

    fn short_timeouts() -> PipelineTimeouts {
        PipelineTimeouts {
            fact_check: Duration::from_millis(100),
            web_search: Duration::from_millis(100),
            encyclopedia: Duration::from_millis(100),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn gather_collects_from_all_sources() {
        let test_deps = TestDependencies::new();
        test_deps
            .fact_check
            .add_claim("Reuters Fact Check", "False", "https://reuters.com/fc/1");
        test_deps
            .web_search
            .add_result("WHO on vaccines", "https://who.int/vaccines", "No microchips.");
        test_deps
            .encyclopedia
            .set_summary("Vaccine", "A vaccine is...", "https://en.wikipedia.org/wiki/Vaccine");

        let bundle = gather(&test_deps.deps(), "vaccine claim", &short_timeouts()).await;
        assert_eq!(bundle.fact_checks.len(), 1);
        assert_eq!(bundle.search_results.len(), 1);
        assert!(bundle.encyclopedia.is_some());
        assert_eq!(bundle.total_sources(), 3);
    }

    #[tokio::test]
    async fn failed_adapter_leaves_empty_slot() {
        let test_deps = TestDependencies::new();
        test_deps.fact_check.set_failing();
        test_deps
            .web_search
            .add_result("result", "https://example.org", "snippet");

        let bundle = gather(&test_deps.deps(), "claim", &short_timeouts()).await;
        assert!(bundle.fact_checks.is_empty());
        assert_eq!(bundle.search_results.len(), 1);
    }

    #[tokio::test]
    async fn all_failures_produce_empty_bundle_not_error() {
        let test_deps = TestDependencies::new();
        test_deps.fact_check.set_failing();
        test_deps.web_search.set_failing();
        test_deps.encyclopedia.set_failing();

        let bundle = gather(&test_deps.deps(), "claim", &short_timeouts()).await;
        assert!(bundle.is_empty());
    }

    #[tokio::test]
    async fn slow_adapter_is_timed_out_within_bound() {
        let test_deps = TestDependencies::new();
        test_deps.fact_check.set_delay(Duration::from_secs(30));

        let started = Instant::now();
        let bundle = gather(&test_deps.deps(), "claim", &short_timeouts()).await;

        // The slot resolves to empty and gather returns near the budget,
        // not after the adapter's 30s sleep.
        assert!(bundle.fact_checks.is_empty());
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
