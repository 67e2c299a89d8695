//! Configuration module
//!
//! The command line is the whole configuration surface of this program, so
//! configuration is a plain struct the CLI populates, plus the validation
//! that separates usage errors from crawl-time failures.

mod types;
mod validation;

// Re-export types
pub use types::{CrawlConfig, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_ITERATION_LIMIT};

// Re-export validation
pub use validation::validate;
