//! Kernel module - server infrastructure and dependencies.

pub mod config;
pub mod deps;
pub mod encyclopedia_client;
pub mod factcheck_client;
pub mod gemini_client;
pub mod page_fetcher;
pub mod safe_browsing_client;
pub mod search_client;
pub mod storage;
pub mod test_dependencies;
pub mod traits;
pub mod translation_client;
pub mod vision_client;

pub use config::{AppConfig, PipelineTimeouts};
pub use deps::ServerDeps;
pub use encyclopedia_client::WikipediaClient;
pub use factcheck_client::{FactCheckClient, NoopFactCheckService};
pub use gemini_client::{GeminiClient, NoopAI};
pub use page_fetcher::PageFetcher;
pub use safe_browsing_client::{NoopUrlSafetyService, SafeBrowsingClient};
pub use search_client::{CustomSearchClient, NoopSearchService};
pub use storage::JsonStorage;
pub use test_dependencies::TestDependencies;
pub use traits::*;
pub use translation_client::{NoopTranslationService, TranslationClient};
pub use vision_client::{NoopVisionService, VisionClient};
