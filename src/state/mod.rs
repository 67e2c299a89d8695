//! State module for tracking crawl progress
//!
//! This module provides the per-invocation state of a crawl: the frontier of
//! accepted pages and the session's budget/failure accounting.
//!
//! # Components
//!
//! - `Page`: an immutable record of an accepted page (url, title, body text, snippet)
//! - `Frontier`: the ordered, capped collection of accepted pages
//! - `CrawlSession`: the iteration budget and fetch-failure counter shared by all phases

mod frontier;
mod session;

// Re-export main types
pub use frontier::{Frontier, Page};
pub use session::CrawlSession;
