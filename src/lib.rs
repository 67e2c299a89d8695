//! Lodestone: a query-anchored web crawler
//!
//! This crate implements a search-style crawler that starts from a seed page,
//! follows hyperlinks outward, and collects pages relevant to a query phrase
//! into a ranked, deduplicated result list with contextual snippets.

pub mod config;
pub mod crawler;
pub mod output;
pub mod query;
pub mod relevance;
pub mod state;

use thiserror::Error;

/// Main error type for Lodestone operations
#[derive(Debug, Error)]
pub enum LodestoneError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while fetching and parsing a single page.
///
/// Every variant except [`FetchError::Unexpected`] is recoverable: the
/// crawl records the failure and moves on to the next candidate link.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Malformed URL: {url}")]
    Malformed { url: String },

    #[error("Could not reach {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Unexpected failure for {url}: {message}")]
    Unexpected { url: String, message: String },
}

impl FetchError {
    /// Recoverable failures are counted and skipped; the rest abort the crawl.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FetchError::Unexpected { .. })
    }

    /// The URL the failed request was for.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Malformed { url }
            | FetchError::Unreachable { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Status { url, .. }
            | FetchError::Unexpected { url, .. } => url,
        }
    }
}

/// Result type alias for Lodestone operations
pub type Result<T> = std::result::Result<T, LodestoneError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, run_crawl, CrawlOutcome, FetchedPage, HttpFetcher, PageFetcher};
pub use output::CrawlReport;
pub use query::Query;
pub use relevance::{DedupMode, RelevanceTier};
pub use state::{Frontier, Page};
