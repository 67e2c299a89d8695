use std::time::Duration;

use crate::relevance::DedupMode;

/// Default budget on candidate visits across a whole crawl
pub const DEFAULT_ITERATION_LIMIT: u32 = 250;

/// Default per-request fetch timeout, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 3;

/// Configuration for one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed URL the crawl starts from
    ///
    /// Not validated up front: an unusable seed surfaces as a recoverable
    /// fetch failure once the crawl tries it.
    pub seed_url: String,

    /// Query phrase, matched as a single unit against title and body
    pub phrase: String,

    /// Maximum number of pages the crawl may accept
    pub result_cap: usize,

    /// Budget on candidate visits shared by all phases
    pub iteration_limit: u32,

    /// How body-content duplicates are detected
    pub dedup_mode: DedupMode,

    /// Per-request fetch timeout
    pub fetch_timeout: Duration,
}

impl CrawlConfig {
    /// Creates a configuration with default limits
    pub fn new(seed_url: &str, phrase: &str, result_cap: usize) -> Self {
        Self {
            seed_url: seed_url.to_string(),
            phrase: phrase.to_string(),
            result_cap,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            dedup_mode: DedupMode::default(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}
