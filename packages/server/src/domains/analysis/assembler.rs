//! Narrative assembler: render the explanation, evidence grid,
//! checklist, and intelligence report from the category tables.
//!
//! Guarantees: at least 3 and at most 5 evidence items, exactly 3
//! checklist items. No generation - string interpolation only.

use super::models::{Category, ChecklistItem, Evidence, EvidenceBundle, IntelligenceReport};
use super::templates::{
    template_for, BASE_CHECKLIST_ITEM, FACT_CHECK_PUBLISHERS, QUALITY_DOMAINS,
};

const MIN_EVIDENCE: usize = 3;
const MAX_EVIDENCE: usize = 5;
const SNIPPET_BUDGET: usize = 150;

fn truncate_snippet(text: &str) -> String {
    if text.chars().count() > SNIPPET_BUDGET {
        let cut: String = text.chars().take(SNIPPET_BUDGET).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn fact_check_phrase(count: usize) -> String {
    if count > 0 {
        format!("We found {} professional fact-check reports that", count)
    } else {
        "Multiple professional fact-checking organizations".to_string()
    }
}

fn search_phrase(count: usize) -> String {
    if count > 0 {
        format!("{} additional sources", count)
    } else {
        "additional credible sources".to_string()
    }
}

/// Render the long-form explanation with live evidence counts.
pub fn explanation(category: Category, fact_check_count: usize, search_count: usize) -> String {
    template_for(category)
        .explanation
        .replace("{fact_check_phrase}", &fact_check_phrase(fact_check_count))
        .replace("{search_phrase}", &search_phrase(search_count))
}

/// Fixed authoritative fallback entries used when the bundle came back empty.
fn fallback_evidence() -> Vec<Evidence> {
    vec![
        Evidence {
            source: "World Health Organization - https://www.who.int".to_string(),
            snippet: "The WHO provides authoritative health information and guidance. For \
                      vaccine-related claims, WHO maintains comprehensive safety information \
                      and debunking of conspiracy theories."
                .to_string(),
            reliability: 0.95,
        },
        Evidence {
            source: "Centers for Disease Control and Prevention - https://www.cdc.gov".to_string(),
            snippet: "CDC provides evidence-based health information for the US public. Their \
                      fact sheets address common health misinformation with scientific evidence."
                .to_string(),
            reliability: 0.94,
        },
        Evidence {
            source: "Reuters Fact Check - https://www.reuters.com/fact-check".to_string(),
            snippet: "Professional news organization with a dedicated fact-checking team that \
                      verifies claims using journalistic standards and multiple sources."
                .to_string(),
            reliability: 0.93,
        },
    ]
}

fn padding_evidence() -> Evidence {
    Evidence {
        source: "Professional Verification Network - https://www.poynter.org/ifcn".to_string(),
        snippet: "International fact-checking network maintains standards for verification and \
                  debunking of false claims across multiple platforms and sources."
            .to_string(),
        reliability: 0.88,
    }
}

/// Build the evidence grid from the bundle: fact-check reviews first,
/// then search results, then the encyclopedia entry, padded to the
/// minimum and capped at the maximum.
pub fn evidence_grid(bundle: &EvidenceBundle) -> Vec<Evidence> {
    let mut grid: Vec<Evidence> = Vec::new();

    // One review per fact-check source, two sources at most
    for claim in bundle.fact_checks.iter().take(2) {
        for review in claim.reviews.iter().take(1) {
            let publisher = review.publisher.to_lowercase();
            let (name, reliability, base_url) = FACT_CHECK_PUBLISHERS
                .iter()
                .find(|(key, _, _, _)| publisher.contains(key))
                .map(|(_, name, reliability, base_url)| (*name, *reliability, *base_url))
                .unwrap_or(("Independent Fact Checker", 0.85, ""));

            let url = if !review.url.is_empty() {
                review.url.as_str()
            } else {
                base_url
            };
            let location = if url.is_empty() { "Fact Check Analysis" } else { url };

            let rating = if review.rating.is_empty() {
                "Disputed"
            } else {
                review.rating.as_str()
            };

            grid.push(Evidence {
                source: format!("{} - {}", name, location),
                snippet: format!(
                    "Professional fact-check rating: {}. This claim has been investigated by \
                     independent journalists and researchers using established verification \
                     methods.",
                    rating
                ),
                reliability,
            });
        }
    }

    // Two search results at most, reliability from the domain allow-list
    for result in bundle.search_results.iter().take(2) {
        if result.title.is_empty() || result.snippet.is_empty() || result.link.is_empty() {
            continue;
        }

        let link = result.link.to_lowercase();
        let mut reliability = 0.70;
        if QUALITY_DOMAINS.iter().any(|d| link.contains(d)) {
            reliability = 0.92;
        }
        if link.contains(".edu") || link.contains(".gov") {
            reliability = f64::max(reliability, 0.88);
        }

        grid.push(Evidence {
            source: format!("{} - {}", result.title, result.link),
            snippet: truncate_snippet(&result.snippet),
            reliability,
        });
    }

    if let Some(page) = &bundle.encyclopedia {
        if !page.extract.is_empty() && !page.title.is_empty() {
            grid.push(Evidence {
                source: format!("Wikipedia: {} - {}", page.title, page.url),
                snippet: format!(
                    "{} This provides encyclopedic context and background information.",
                    truncate_snippet(&page.extract)
                ),
                reliability: 0.82,
            });
        }
    }

    if grid.is_empty() {
        grid = fallback_evidence();
    }
    while grid.len() < MIN_EVIDENCE {
        grid.push(padding_evidence());
    }
    grid.truncate(MAX_EVIDENCE);
    grid
}

/// Universal item plus up to two category items; always exactly 3.
pub fn checklist(category: Category) -> Vec<ChecklistItem> {
    let mut items = vec![ChecklistItem {
        point: BASE_CHECKLIST_ITEM.0.to_string(),
        explanation: BASE_CHECKLIST_ITEM.1.to_string(),
    }];

    for (point, explanation) in template_for(category).checklist.iter().take(2) {
        items.push(ChecklistItem {
            point: point.to_string(),
            explanation: explanation.to_string(),
        });
    }

    items
}

/// Copy the category's paragraph set into the structured report.
pub fn intelligence(category: Category) -> IntelligenceReport {
    let paragraphs = &template_for(category).intelligence;
    IntelligenceReport {
        political: paragraphs.political.map(str::to_string),
        financial: paragraphs.financial.map(str::to_string),
        psychological: paragraphs.psychological.map(str::to_string),
        scientific: paragraphs.scientific.map(str::to_string),
        philosophical: paragraphs.philosophical.map(str::to_string),
        geopolitical: paragraphs.geopolitical.map(str::to_string),
        technical: paragraphs.technical.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{ClaimReview, EncyclopediaSummary, FactCheckClaim, SearchResult};

    fn claim(publisher: &str, rating: &str, url: &str) -> FactCheckClaim {
        FactCheckClaim {
            text: "claim".to_string(),
            reviews: vec![ClaimReview {
                publisher: publisher.to_string(),
                rating: rating.to_string(),
                url: url.to_string(),
            }],
        }
    }

    #[test]
    fn empty_bundle_gets_authoritative_fallback_trio() {
        let grid = evidence_grid(&EvidenceBundle::default());
        assert_eq!(grid.len(), 3);
        assert!(grid[0].source.contains("World Health Organization"));
        assert!(grid.iter().all(|e| e.reliability >= 0.9));
    }

    #[test]
    fn sparse_bundle_is_padded_to_minimum() {
        let bundle = EvidenceBundle {
            fact_checks: vec![claim("Snopes", "False", "https://snopes.com/x")],
            search_results: vec![],
            encyclopedia: None,
        };
        let grid = evidence_grid(&bundle);
        assert_eq!(grid.len(), 3);
        assert!(grid[1].source.contains("Professional Verification Network"));
    }

    #[test]
    fn rich_bundle_is_capped_at_five() {
        let bundle = EvidenceBundle {
            fact_checks: vec![
                claim("Reuters", "False", "https://reuters.com/a"),
                claim("Snopes", "False", "https://snopes.com/b"),
                claim("PolitiFact", "False", "https://politifact.com/c"),
            ],
            search_results: vec![
                SearchResult {
                    title: "WHO".to_string(),
                    link: "https://who.int/a".to_string(),
                    snippet: "context".to_string(),
                },
                SearchResult {
                    title: "CDC".to_string(),
                    link: "https://cdc.gov/b".to_string(),
                    snippet: "context".to_string(),
                },
                SearchResult {
                    title: "Third".to_string(),
                    link: "https://example.org/c".to_string(),
                    snippet: "context".to_string(),
                },
            ],
            encyclopedia: Some(EncyclopediaSummary {
                title: "Topic".to_string(),
                extract: "Background.".to_string(),
                url: "https://en.wikipedia.org/wiki/Topic".to_string(),
            }),
        };
        let grid = evidence_grid(&bundle);
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn recognized_publisher_gets_its_reliability_band() {
        let bundle = EvidenceBundle {
            fact_checks: vec![claim("Reuters Fact Check", "False", "")],
            search_results: vec![],
            encyclopedia: None,
        };
        let grid = evidence_grid(&bundle);
        assert!(grid[0].source.starts_with("Reuters Fact Check"));
        assert_eq!(grid[0].reliability, 0.93);
        // No review URL: falls back to the publisher base URL
        assert!(grid[0].source.contains("reuters.com"));
    }

    #[test]
    fn quality_domain_search_results_outrank_generic_ones() {
        let bundle = EvidenceBundle {
            fact_checks: vec![],
            search_results: vec![
                SearchResult {
                    title: "WHO page".to_string(),
                    link: "https://www.who.int/page".to_string(),
                    snippet: "official guidance".to_string(),
                },
                SearchResult {
                    title: "Blog".to_string(),
                    link: "https://blog.example.org/post".to_string(),
                    snippet: "opinion".to_string(),
                },
            ],
            encyclopedia: None,
        };
        let grid = evidence_grid(&bundle);
        assert_eq!(grid[0].reliability, 0.92);
        assert_eq!(grid[1].reliability, 0.70);
    }

    #[test]
    fn long_snippets_are_truncated() {
        let bundle = EvidenceBundle {
            fact_checks: vec![],
            search_results: vec![SearchResult {
                title: "Long".to_string(),
                link: "https://example.org".to_string(),
                snippet: "x".repeat(400),
            }],
            encyclopedia: None,
        };
        let grid = evidence_grid(&bundle);
        assert!(grid[0].snippet.len() <= SNIPPET_BUDGET + 3);
        assert!(grid[0].snippet.ends_with("..."));
    }

    #[test]
    fn checklist_is_always_exactly_three_items() {
        for category in [
            Category::VaccineConspiracy,
            Category::ElectionMisinformation,
            Category::GeneralMisinformation,
        ] {
            let items = checklist(category);
            assert_eq!(items.len(), 3);
            assert_eq!(items[0].point, "Checked multiple credible sources");
        }
    }

    #[test]
    fn explanation_interpolates_live_counts() {
        let text = explanation(Category::HealthMisinformation, 2, 4);
        assert!(text.contains("2 professional fact-check reports"));
        assert!(text.contains("4 additional sources"));
        assert!(!text.contains("{fact_check_phrase}"));
        assert!(!text.contains("{search_phrase}"));
    }

    #[test]
    fn intelligence_report_carries_category_paragraphs() {
        let report = intelligence(Category::VaccineConspiracy);
        assert!(report.scientific.unwrap().contains("peer-reviewed"));
        assert!(report.technical.is_some());
    }
}
