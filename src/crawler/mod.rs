//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with error classification
//! - HTML parsing, text flattening, and link extraction
//! - The three-phase traversal that ranks relevant pages

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator, CrawlOutcome};
pub use fetcher::{FetchedPage, HttpFetcher, PageFetcher, USER_AGENT};
pub use parser::{parse_page, ParsedPage};

use crate::config::CrawlConfig;
use crate::LodestoneError;

/// Runs a complete crawl with the default HTTP fetcher
///
/// This is the one-stop entry point for callers that do not need to supply
/// their own [`PageFetcher`]: it builds an [`HttpFetcher`] from the
/// configured timeout and drives all three crawl phases.
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Accepted pages and the fetch failure count
/// * `Err(LodestoneError)` - The crawl could not be completed
pub async fn crawl(config: &CrawlConfig) -> Result<CrawlOutcome, LodestoneError> {
    let fetcher = HttpFetcher::new(config.fetch_timeout)?;
    run_crawl(config, fetcher).await
}
