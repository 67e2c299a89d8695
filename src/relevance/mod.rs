//! Relevance module for judging and filtering candidate pages
//!
//! Candidates flow through this module in pipeline order: classification
//! against the query phrase, duplicate suppression against already accepted
//! pages, and snippet extraction for the pages that survive.
//!
//! # Components
//!
//! - `classify` / `RelevanceTier`: tiered phrase matching against title and body
//! - `DuplicateIndex` / `DedupMode`: constant-time duplicate suppression
//! - `extract_snippet`: bounded context excerpt around the first phrase occurrence

mod classify;
mod dedup;
mod snippet;

// Re-export main types
pub use classify::{classify, RelevanceTier};
pub use dedup::{DedupMode, DuplicateIndex};
pub use snippet::extract_snippet;
