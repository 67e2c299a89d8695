use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::state::Page;

/// How body-content duplicates are detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupMode {
    /// Inherited heuristic: a candidate is a duplicate when its title's
    /// character count equals the body-text character count of some already
    /// accepted page. Kept as the default because the ranking it produces
    /// is the documented behavior of this system.
    #[default]
    LegacyLength,

    /// Corrected variant: a candidate is a duplicate when its body text has
    /// the same SHA-256 digest as an accepted page's body text.
    ContentHash,
}

/// Records accepted pages and answers duplicate queries in constant time
///
/// Three independent checks: exact title equality, the configured body
/// rule, and exact snippet equality. The snippet check is consulted only
/// for title-and-body tier candidates, but snippets of every accepted page
/// participate in it.
#[derive(Debug)]
pub struct DuplicateIndex {
    mode: DedupMode,
    titles: HashSet<String>,
    body_lengths: HashSet<usize>,
    body_hashes: HashSet<String>,
    snippets: HashSet<String>,
}

impl DuplicateIndex {
    /// Creates an empty index using the given body-duplicate rule
    pub fn new(mode: DedupMode) -> Self {
        Self {
            mode,
            titles: HashSet::new(),
            body_lengths: HashSet::new(),
            body_hashes: HashSet::new(),
            snippets: HashSet::new(),
        }
    }

    /// True when the candidate repeats an accepted page's title or trips
    /// the configured body rule
    pub fn is_duplicate(&self, title: &str, body_text: &str) -> bool {
        if self.titles.contains(title) {
            return true;
        }

        match self.mode {
            DedupMode::LegacyLength => self.body_lengths.contains(&title.chars().count()),
            DedupMode::ContentHash => self.body_hashes.contains(&hash_body(body_text)),
        }
    }

    /// True when the snippet exactly matches an accepted page's snippet
    pub fn is_snippet_duplicate(&self, snippet: &str) -> bool {
        self.snippets.contains(snippet)
    }

    /// Records an accepted page so later candidates are checked against it
    pub fn record(&mut self, page: &Page) {
        self.titles.insert(page.title.clone());
        match self.mode {
            DedupMode::LegacyLength => {
                self.body_lengths.insert(page.body_text.chars().count());
            }
            DedupMode::ContentHash => {
                self.body_hashes.insert(hash_body(&page.body_text));
            }
        }
        self.snippets.insert(page.snippet.clone());
    }
}

fn hash_body(body_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body_text.as_bytes());
    hex::encode(hasher.finalize())
}
