//! Crawl coordinator - the three-phase traversal
//!
//! This module owns the crawl loop that turns a seed URL and a query phrase
//! into a ranked frontier of relevant pages:
//! - Phase one expands the seed page's links against the phrase
//! - Phase two widens through the links of pages accepted so far
//! - Phase three re-expands the seed's links once per stemmed query term
//!
//! All phases share one visit budget and one frontier, and every candidate
//! runs through the same pipeline: classification, duplicate suppression,
//! snippet extraction, admission.

use std::collections::HashMap;
use std::time::Instant;

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{FetchedPage, PageFetcher};
use crate::query::Query;
use crate::relevance::{classify, extract_snippet, DuplicateIndex, RelevanceTier};
use crate::state::{CrawlSession, Frontier, Page};
use crate::LodestoneError;

/// Which part of the traversal a candidate is being expanded for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// Expanding the seed page's links against the original phrase
    Seed,

    /// Expanding links of pages accepted earlier in the crawl
    Widen,

    /// Re-expanding the seed's links with a stemmed fallback term
    Fallback,
}

/// Result of a finished crawl
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Accepted pages in ranking order
    pub frontier: Frontier,

    /// Recoverable fetch failures encountered along the way
    pub fetch_failures: u32,
}

/// Drives the three-phase traversal over a [`PageFetcher`]
///
/// Owns every piece of per-invocation state, so a crawl is a value that can
/// be constructed, run once, and inspected, with nothing global left behind.
pub struct Coordinator<F: PageFetcher> {
    fetcher: F,
    seed_url: String,
    query: Query,
    session: CrawlSession,
    frontier: Frontier,
    dedup: DuplicateIndex,

    /// Outgoing links of accepted pages, keyed by URL and recorded at
    /// admission time so the widening phase can expand them without
    /// fetching the page a second time.
    accepted_links: HashMap<String, Vec<String>>,
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a coordinator for one crawl invocation
    pub fn new(config: &CrawlConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            seed_url: config.seed_url.clone(),
            query: Query::new(&config.phrase),
            session: CrawlSession::new(config.iteration_limit),
            frontier: Frontier::new(config.result_cap),
            dedup: DuplicateIndex::new(config.dedup_mode),
            accepted_links: HashMap::new(),
        }
    }

    /// Runs the three phases to completion
    pub async fn run(mut self) -> Result<CrawlOutcome, LodestoneError> {
        let start_time = Instant::now();
        tracing::info!(
            "Starting crawl of {} for phrase \"{}\"",
            self.seed_url,
            self.query.phrase
        );

        self.expand_seed().await?;
        self.widen_from_accepted().await?;
        self.stemmed_fallback().await?;

        tracing::info!(
            "Crawl completed: {} pages accepted, {} visits, {} failures in {:?}",
            self.frontier.len(),
            self.session.iterations(),
            self.session.fetch_failures(),
            start_time.elapsed()
        );

        Ok(CrawlOutcome {
            fetch_failures: self.session.fetch_failures(),
            frontier: self.frontier,
        })
    }

    /// Phase one: fetch the seed and expand its links against the phrase
    ///
    /// A recoverable seed failure counts like any other fetch failure and
    /// simply leaves this phase with nothing to expand.
    async fn expand_seed(&mut self) -> Result<(), LodestoneError> {
        tracing::debug!("Expanding seed page {}", self.seed_url);

        let seed = match self.fetcher.fetch(&self.seed_url).await {
            Ok(page) => page,
            Err(error) if error.is_recoverable() => {
                tracing::debug!("Seed fetch failed for {}: {}", self.seed_url, error);
                self.session.record_failure();
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };

        let phrase = self.query.phrase.clone();
        self.expand_links(&seed.links, &phrase, CrawlPhase::Seed)
            .await
    }

    /// Phase two: widen through links of pages accepted so far
    ///
    /// Walks the frontier by logical index while it grows, so pages accepted
    /// during this phase are themselves expanded later in the same walk.
    /// Links come from the records made at admission time; the accepted
    /// pages are not fetched again.
    async fn widen_from_accepted(&mut self) -> Result<(), LodestoneError> {
        if self.frontier.is_empty() || self.frontier.is_full() || self.session.budget_exhausted() {
            return Ok(());
        }
        tracing::debug!("Widening from {} accepted pages", self.frontier.len());

        let phrase = self.query.phrase.clone();
        let mut index = 0;
        while index < self.frontier.len() {
            if self.session.budget_exhausted() || self.frontier.is_full() {
                break;
            }

            let Some(url) = self.frontier.get(index).map(|page| page.url.clone()) else {
                break;
            };
            let links = self.accepted_links.get(&url).cloned().unwrap_or_default();
            self.expand_links(&links, &phrase, CrawlPhase::Widen).await?;

            index += 1;
        }

        Ok(())
    }

    /// Phase three: re-expand the seed's links per stemmed fallback term
    ///
    /// Stopwords never reach this phase; each surviving term fetches the
    /// seed afresh and matches candidates against the stem instead of the
    /// original phrase. Budget and cap are checked before every term so an
    /// exhausted crawl spends no further fetches here.
    async fn stemmed_fallback(&mut self) -> Result<(), LodestoneError> {
        if self.frontier.is_full() || self.session.budget_exhausted() {
            return Ok(());
        }

        for term in self.query.fallback_terms() {
            if self.session.budget_exhausted() || self.frontier.is_full() {
                break;
            }
            tracing::debug!("Expanding seed links for fallback term \"{}\"", term);

            let seed = match self.fetcher.fetch(&self.seed_url).await {
                Ok(page) => page,
                Err(error) if error.is_recoverable() => {
                    tracing::debug!("Seed fetch failed for {}: {}", self.seed_url, error);
                    self.session.record_failure();
                    continue;
                }
                Err(error) => return Err(error.into()),
            };

            self.expand_links(&seed.links, &term, CrawlPhase::Fallback)
                .await?;
        }

        Ok(())
    }

    /// Expands a list of candidate links against `phrase`
    ///
    /// Shared by all three phases; `phase` only decides where title-and-body
    /// matches land in the frontier. Per candidate, in order: spend a visit
    /// (the visit crossing the budget is the last one processed), stop if
    /// the frontier is full, fetch, then hand the page to the pipeline.
    /// Recoverable fetch failures are counted and skipped.
    async fn expand_links(
        &mut self,
        links: &[String],
        phrase: &str,
        phase: CrawlPhase,
    ) -> Result<(), LodestoneError> {
        for url in links {
            if !self.session.try_visit() {
                tracing::debug!("Visit budget exhausted during {:?} phase", phase);
                break;
            }
            if self.frontier.is_full() {
                tracing::debug!("Result cap reached during {:?} phase", phase);
                break;
            }

            let page = match self.fetcher.fetch(url).await {
                Ok(page) => page,
                Err(error) if error.is_recoverable() => {
                    tracing::debug!("Failed to fetch candidate {}: {}", url, error);
                    self.session.record_failure();
                    continue;
                }
                Err(error) => return Err(error.into()),
            };

            self.consider(page, phrase, phase);
        }

        Ok(())
    }

    /// Runs one fetched candidate through classification, duplicate
    /// suppression, and snippet extraction
    fn consider(&mut self, page: FetchedPage, phrase: &str, phase: CrawlPhase) {
        let tier = classify(&page.title, &page.body_text, phrase);
        if !tier.is_relevant() {
            tracing::trace!("Rejected {} (no phrase match)", page.url);
            return;
        }

        if self.dedup.is_duplicate(&page.title, &page.body_text) {
            tracing::trace!("Rejected {} (duplicate)", page.url);
            return;
        }

        let snippet = extract_snippet(&page.body_text, phrase);
        if tier == RelevanceTier::TitleAndBody && self.dedup.is_snippet_duplicate(&snippet) {
            tracing::trace!("Rejected {} (duplicate snippet)", page.url);
            return;
        }

        self.admit(page, snippet, tier, phase);
    }

    /// Admits a page, recording what later candidates and phases need
    fn admit(&mut self, page: FetchedPage, snippet: String, tier: RelevanceTier, phase: CrawlPhase) {
        let accepted = Page::new(page.url.clone(), page.title, page.body_text, snippet);
        self.dedup.record(&accepted);
        self.accepted_links.insert(page.url, page.links);

        tracing::debug!("Accepted {} ({:?}, {:?} phase)", accepted.url, tier, phase);

        // Only title-and-body matches found off the seed outrank earlier
        // finds; everything else queues up behind.
        if tier == RelevanceTier::TitleAndBody && phase == CrawlPhase::Seed {
            self.frontier.push_lead(accepted);
        } else {
            self.frontier.push_tail(accepted);
        }
    }
}

/// Runs a complete crawl with the given configuration and fetcher
///
/// This is the main entry point: it drives all three phases and hands back
/// the accepted frontier together with the count of pages that could not be
/// retrieved along the way.
pub async fn run_crawl<F: PageFetcher>(
    config: &CrawlConfig,
    fetcher: F,
) -> Result<CrawlOutcome, LodestoneError> {
    Coordinator::new(config, fetcher).run().await
}
