// Analysis domain - misinformation detection over text, URLs, and images
//
// Data flow: classifier + aggregator -> synthesizer -> assembler,
// orchestrated by the pipeline. Everything below the pipeline is a pure
// function over the evidence bundle.

pub mod aggregator;
pub mod assembler;
pub mod classifier;
pub mod models;
pub mod pipeline;
pub mod synthesizer;
pub mod templates;

pub use models::{
    AnalysisResult, Category, ChecklistItem, ConfidenceBreakdown, Evidence, EvidenceBundle,
    IntelligenceReport, Verdict, VerdictLabel,
};
pub use pipeline::{AnalysisError, AnalysisPipeline, ContentType};
