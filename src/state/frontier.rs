/// A page accepted into the result frontier
///
/// Records are immutable once admitted: the snippet is computed at
/// classification time, before the record is constructed, and the record
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// URL the page was fetched from
    pub url: String,

    /// Contents of the `<title>` element, trimmed
    pub title: String,

    /// Visible body text with whitespace collapsed to single spaces
    pub body_text: String,

    /// Context surrounding the first occurrence of the matched phrase
    pub snippet: String,
}

impl Page {
    /// Creates a new page record
    pub fn new(url: String, title: String, body_text: String, snippet: String) -> Self {
        Self {
            url,
            title,
            body_text,
            snippet,
        }
    }
}

/// The ordered collection of accepted pages, bounded by the result cap
///
/// Pages land in one of two accumulation lists. The `lead` list holds pages
/// promoted to the front of the ranking (each new entry outranks the ones
/// before it), and the `tail` list holds everything else in admission order.
/// The logical order of the frontier is `lead` newest-first, followed by
/// `tail` oldest-first.
///
/// Invariants (enforced by the crawl pipeline, not by this type): length
/// never exceeds the cap, no two entries share a title, and no two entries
/// admitted on the title-and-body tier share a snippet.
#[derive(Debug, Clone)]
pub struct Frontier {
    cap: usize,
    lead: Vec<Page>,
    tail: Vec<Page>,
}

impl Frontier {
    /// Creates an empty frontier bounded by `cap` entries
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            lead: Vec::new(),
            tail: Vec::new(),
        }
    }

    /// Admits a page at the front of the ranking
    ///
    /// Used for title-and-body matches found while expanding the seed page;
    /// the most recently found page sits first.
    pub fn push_lead(&mut self, page: Page) {
        self.lead.push(page);
    }

    /// Admits a page at the back of the ranking
    pub fn push_tail(&mut self, page: Page) {
        self.tail.push(page);
    }

    /// Number of accepted pages
    pub fn len(&self) -> usize {
        self.lead.len() + self.tail.len()
    }

    /// True when no pages have been accepted
    pub fn is_empty(&self) -> bool {
        self.lead.is_empty() && self.tail.is_empty()
    }

    /// True when the frontier has reached the result cap
    pub fn is_full(&self) -> bool {
        self.len() >= self.cap
    }

    /// Configured result cap
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the page at `index` in logical order
    ///
    /// Index 0 is the newest lead entry; tail entries follow in admission
    /// order. Safe to call while tail entries are being appended, which is
    /// how the widening phase walks a frontier that grows under it.
    pub fn get(&self, index: usize) -> Option<&Page> {
        if index < self.lead.len() {
            self.lead.get(self.lead.len() - 1 - index)
        } else {
            self.tail.get(index - self.lead.len())
        }
    }

    /// Iterates pages in logical order
    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.lead.iter().rev().chain(self.tail.iter())
    }

    /// Consumes the frontier, yielding pages in logical order
    pub fn into_pages(self) -> Vec<Page> {
        let mut pages = self.lead;
        pages.reverse();
        pages.extend(self.tail);
        pages
    }
}
