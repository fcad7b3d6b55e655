//! Data model for analysis results.
//!
//! Everything here lives for one request. The only cross-request
//! identity is the opaque `id`, used for later lookup in storage.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::kernel::{EncyclopediaSummary, FactCheckClaim, SearchResult};

// =============================================================================
// Claim categories
// =============================================================================

/// Misinformation topic class used to select canned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    VaccineConspiracy,
    ElectionMisinformation,
    HealthMisinformation,
    ClimateMisinformation,
    FinancialMisinformation,
    GeneralMisinformation,
}

impl Category {
    /// Audit-trail name, matching the wire contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::VaccineConspiracy => "vaccine_conspiracy",
            Category::ElectionMisinformation => "election_misinformation",
            Category::HealthMisinformation => "health_misinformation",
            Category::ClimateMisinformation => "climate_misinformation",
            Category::FinancialMisinformation => "financial_misinformation",
            Category::GeneralMisinformation => "general_misinformation",
        }
    }

    /// Human-readable domain label shown at the top of the report.
    pub fn domain_label(&self) -> &'static str {
        match self {
            Category::VaccineConspiracy | Category::HealthMisinformation => "Health & Medical",
            Category::ElectionMisinformation => "Electoral & Political",
            Category::ClimateMisinformation => "Climate & Environment",
            Category::FinancialMisinformation => "Financial & Economic",
            Category::GeneralMisinformation => "General Information",
        }
    }
}

// =============================================================================
// Verdict
// =============================================================================

/// Categorical verdict label. Serialized in the decorated display form
/// the frontend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictLabel {
    #[serde(rename = "✅ Verified")]
    Verified,
    #[serde(rename = "❌ False")]
    False,
    #[serde(rename = "⚠️ Caution")]
    Caution,
    #[serde(rename = "⚠️ Error")]
    Error,
    #[serde(rename = "⚠️ Timeout")]
    Timeout,
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VerdictLabel::Verified => "✅ Verified",
            VerdictLabel::False => "❌ False",
            VerdictLabel::Caution => "⚠️ Caution",
            VerdictLabel::Error => "⚠️ Error",
            VerdictLabel::Timeout => "⚠️ Timeout",
        };
        f.write_str(s)
    }
}

/// Named sub-scores shown alongside the overall confidence.
/// Invariant: every value is in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBreakdown {
    pub fact_checks: u8,
    pub source_credibility: u8,
    pub model_consensus: u8,
    pub technical_feasibility: u8,
    pub cross_media: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub label: VerdictLabel,
    /// Confidence percentage, 0-100
    pub confidence: u8,
    pub summary: String,
    pub breakdown: ConfidenceBreakdown,
}

// =============================================================================
// Report parts
// =============================================================================

/// One entry in the evidence grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub source: String,
    pub snippet: String,
    /// 0-1 reliability score, assigned from the domain allow-lists
    pub reliability: f64,
}

/// Educational checklist entry shown under the evidence grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub point: String,
    pub explanation: String,
}

/// Optional named narratives, at most one paragraph per angle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub political: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychological: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub philosophical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geopolitical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<String>,
}

// =============================================================================
// Root aggregate
// =============================================================================

/// The full analysis report returned to the caller. Never mutated after
/// being returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub input: String,
    pub domain: String,
    pub verdict: Verdict,
    /// Long-form explanation text
    pub explanation: String,
    pub evidence: Vec<Evidence>,
    pub checklist: Vec<ChecklistItem>,
    pub intelligence: IntelligenceReport,
    /// Free-form audit mapping: timings, detected language, counts, flags
    pub audit: Map<String, Value>,
}

impl AnalysisResult {
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}

// =============================================================================
// Evidence bundle (internal)
// =============================================================================

/// Whatever the adapters returned for one request, gaps included.
/// Produced by the aggregator, consumed by the synthesizer, discarded.
#[derive(Debug, Clone, Default)]
pub struct EvidenceBundle {
    pub fact_checks: Vec<FactCheckClaim>,
    pub search_results: Vec<SearchResult>,
    pub encyclopedia: Option<EncyclopediaSummary>,
}

impl EvidenceBundle {
    pub fn is_empty(&self) -> bool {
        self.fact_checks.is_empty() && self.search_results.is_empty() && self.encyclopedia.is_none()
    }

    /// Count of contributing sources; the encyclopedia hit counts as one.
    pub fn total_sources(&self) -> usize {
        self.fact_checks.len()
            + self.search_results.len()
            + usize::from(self.encyclopedia.is_some())
    }
}
