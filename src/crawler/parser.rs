//! HTML parser for extracting the signal the crawl consumes
//!
//! This module reduces a fetched document to three things:
//! - The page title (from the `<title>` tag)
//! - The visible body text, whitespace-collapsed for phrase matching
//! - The outgoing links, resolved against the page's own URL

use std::collections::HashSet;

use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title, trimmed; empty when the document has none
    pub title: String,

    /// Visible body text with runs of whitespace collapsed to single spaces
    pub body_text: String,

    /// Outgoing links in discovery order, duplicates and self-links removed
    pub links: Vec<String>,
}

/// Parses HTML content into the title/body/links triple
///
/// `page_url` is the URL the document was fetched from; relative hrefs are
/// resolved against it and links back to it are dropped.
pub fn parse_page(html: &str, page_url: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        body_text: extract_body_text(&document),
        links: extract_links(&document, page_url),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Extracts the visible body text, collapsing whitespace
fn extract_body_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };

    let raw: String = document
        .select(&selector)
        .flat_map(|body| body.text())
        .collect();

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts outgoing links from `<a href>` elements
///
/// Discovery order is preserved; duplicates (by resolved string) and links
/// back to the page itself are dropped.
fn extract_links(document: &Html, page_url: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            let resolved = resolve_href(href, page_url);
            if resolved == page_url {
                continue;
            }
            if seen.insert(resolved.clone()) {
                links.push(resolved);
            }
        }
    }

    links
}

/// Resolves an href against the page URL
///
/// Scheme-qualified hrefs pass through untouched, root-relative hrefs are
/// appended to the page URL, and anything else is joined with a slash.
/// Unresolvable results are allowed to surface later as fetch failures.
fn resolve_href(href: &str, page_url: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{page_url}{href}")
    } else {
        format!("{page_url}/{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "http://example.test";

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.title, "Test Page");
    }

    #[test]
    fn test_extract_title_with_whitespace() {
        let html = r#"<html><head><title>  Test Page  </title></head><body></body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.title, "Test Page");
    }

    #[test]
    fn test_missing_title_is_empty() {
        let html = r#"<html><head></head><body>text</body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.title, "");
    }

    #[test]
    fn test_extract_body_text() {
        let html = r#"<html><body><p>Fluffy cats</p> <p>are great</p></body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.body_text, "Fluffy cats are great");
    }

    #[test]
    fn test_body_text_collapses_whitespace() {
        let html = "<html><body>  spread\n\nout \t text  </body></html>";
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.body_text, "spread out text");
    }

    #[test]
    fn test_body_text_ignores_title() {
        let html = r#"<html><head><title>Heading</title></head><body>just this</body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.body_text, "just this");
    }

    #[test]
    fn test_absolute_href_passes_through() {
        let html = r#"<html><body><a href="https://other.test/page">Link</a></body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.links, vec!["https://other.test/page"]);
    }

    #[test]
    fn test_root_relative_href_appends_to_page_url() {
        let html = r#"<html><body><a href="/section/page">Link</a></body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.links, vec!["http://example.test/section/page"]);
    }

    #[test]
    fn test_bare_href_joined_with_slash() {
        let html = r#"<html><body><a href="page.html">Link</a></body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.links, vec!["http://example.test/page.html"]);
    }

    #[test]
    fn test_duplicate_links_kept_once() {
        let html = r#"
            <html><body>
                <a href="/a">First</a>
                <a href="/a">Again</a>
                <a href="/b">Other</a>
            </body></html>
        "#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(
            parsed.links,
            vec!["http://example.test/a", "http://example.test/b"]
        );
    }

    #[test]
    fn test_self_link_dropped() {
        let html = r#"<html><body><a href="http://example.test">Home</a><a href="/other">Other</a></body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(parsed.links, vec!["http://example.test/other"]);
    }

    #[test]
    fn test_discovery_order_preserved() {
        let html = r#"
            <html><body>
                <a href="/c">C</a>
                <a href="/a">A</a>
                <a href="/b">B</a>
            </body></html>
        "#;
        let parsed = parse_page(html, PAGE_URL);
        assert_eq!(
            parsed.links,
            vec![
                "http://example.test/c",
                "http://example.test/a",
                "http://example.test/b"
            ]
        );
    }

    #[test]
    fn test_no_links() {
        let html = r#"<html><body>No links here.</body></html>"#;
        let parsed = parse_page(html, PAGE_URL);
        assert!(parsed.links.is_empty());
    }
}
