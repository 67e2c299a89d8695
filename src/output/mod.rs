//! Output module for presenting crawl results
//!
//! This module handles:
//! - Formatting the ranked result list with titles, URLs, and snippets
//! - Reporting how many pages could not be retrieved

mod report;

pub use report::{print_report, CrawlReport};
