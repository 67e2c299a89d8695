//! Search result report generation
//!
//! Turns a finished crawl into the text shown to the user: how many pages
//! could not be retrieved, how many relevant pages were found, and the
//! ranked result entries with their snippets.

use crate::crawler::CrawlOutcome;
use crate::state::Page;

/// A finished crawl prepared for presentation
#[derive(Debug)]
pub struct CrawlReport {
    /// The query phrase the crawl was anchored to
    pub phrase: String,

    /// The seed URL the crawl started from
    pub seed_url: String,

    /// Accepted pages in ranking order
    pub pages: Vec<Page>,

    /// Pages that could not be retrieved during the crawl
    pub fetch_failures: u32,
}

impl CrawlReport {
    /// Builds a report from a crawl outcome
    ///
    /// # Arguments
    ///
    /// * `outcome` - The finished crawl
    /// * `phrase` - The query phrase that anchored it
    /// * `seed_url` - The seed URL it started from
    pub fn new(outcome: CrawlOutcome, phrase: &str, seed_url: &str) -> Self {
        Self {
            phrase: phrase.to_string(),
            seed_url: seed_url.to_string(),
            fetch_failures: outcome.fetch_failures,
            pages: outcome.frontier.into_pages(),
        }
    }

    /// Formats the report as display text
    ///
    /// The failure line only appears when something actually failed, and
    /// the result header and entries only appear when something was found.
    pub fn render(&self) -> String {
        let mut text = String::new();

        if self.fetch_failures > 0 {
            text.push_str(&format!(
                "{} page(s) could not be retrieved.\n\n",
                self.fetch_failures
            ));
        }

        text.push_str(&format!(
            "{} relevant page(s) have been found.\n",
            self.pages.len()
        ));

        if !self.pages.is_empty() {
            text.push('\n');
            text.push_str(&format!(
                "Here are your search results for the key phrase \"{}\" on the website \"{}\":\n",
                self.phrase, self.seed_url
            ));

            for (index, page) in self.pages.iter().enumerate() {
                text.push('\n');
                text.push_str(&format!("Page {}: {}\n", index + 1, page.title));
                text.push_str(&format!("URL: {}\n", page.url));
                text.push_str(&format!("Snippet: {}\n", page.snippet));
            }
        }

        text
    }
}

/// Prints a report to stdout
///
/// # Arguments
///
/// * `report` - The report to display
pub fn print_report(report: &CrawlReport) {
    print!("{}", report.render());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Frontier;

    fn create_test_page(url: &str, title: &str, snippet: &str) -> Page {
        Page::new(
            url.to_string(),
            title.to_string(),
            "body text".to_string(),
            snippet.to_string(),
        )
    }

    fn create_test_report(pages: Vec<Page>, fetch_failures: u32) -> CrawlReport {
        let mut frontier = Frontier::new(10);
        for page in pages {
            frontier.push_tail(page);
        }
        let outcome = CrawlOutcome {
            frontier,
            fetch_failures,
        };
        CrawlReport::new(outcome, "fluffy cats", "http://seed.test")
    }

    #[test]
    fn test_render_empty_report() {
        let report = create_test_report(vec![], 0);
        assert_eq!(report.render(), "0 relevant page(s) have been found.\n");
    }

    #[test]
    fn test_render_failures_only() {
        let report = create_test_report(vec![], 2);
        assert_eq!(
            report.render(),
            "2 page(s) could not be retrieved.\n\n0 relevant page(s) have been found.\n"
        );
    }

    #[test]
    fn test_render_full_report() {
        let report = create_test_report(
            vec![
                create_test_page("http://a.test", "First page", "...snippet one..."),
                create_test_page("http://b.test", "Second page", "snippet two"),
            ],
            1,
        );

        let expected = "\
1 page(s) could not be retrieved.

2 relevant page(s) have been found.

Here are your search results for the key phrase \"fluffy cats\" on the website \"http://seed.test\":

Page 1: First page
URL: http://a.test
Snippet: ...snippet one...

Page 2: Second page
URL: http://b.test
Snippet: snippet two
";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_render_keeps_ranking_order() {
        let mut frontier = Frontier::new(10);
        frontier.push_tail(create_test_page("http://early.test", "Early find", "one"));
        frontier.push_lead(create_test_page("http://strong.test", "Strong find", "two"));
        let outcome = CrawlOutcome {
            frontier,
            fetch_failures: 0,
        };

        let report = CrawlReport::new(outcome, "q", "http://seed.test");

        assert_eq!(report.pages[0].url, "http://strong.test");
        assert_eq!(report.pages[1].url, "http://early.test");
        let rendered = report.render();
        let strong = rendered.find("Page 1: Strong find");
        let early = rendered.find("Page 2: Early find");
        assert!(strong.is_some());
        assert!(early.is_some());
    }

    #[test]
    fn test_render_no_header_without_results() {
        let report = create_test_report(vec![], 3);
        assert!(!report.render().contains("Here are your search results"));
    }
}
