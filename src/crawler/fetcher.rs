//! HTTP fetcher implementation
//!
//! One page is fetched at a time; the crawl blocks on each fetch before
//! looking at the next candidate. The [`PageFetcher`] trait is the seam the
//! coordinator is driven through, so tests can script page graphs without a
//! network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::parser::parse_page;
use crate::{FetchError, FetchResult};

/// User agent presented to crawled sites
pub const USER_AGENT: &str = concat!("lodestone/", env!("CARGO_PKG_VERSION"));

/// A fetched page reduced to what the crawl consumes
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL the page was requested as
    pub url: String,

    /// Page title, empty when the document has none
    pub title: String,

    /// Whitespace-collapsed visible body text
    pub body_text: String,

    /// Outgoing links in discovery order
    pub links: Vec<String>,
}

/// Fetches and parses a single page
#[async_trait]
pub trait PageFetcher {
    /// Resolves `url` into a parsed page, or a classified fetch failure
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;
}

/// [`PageFetcher`] backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> crate::Result<Self> {
        let client = build_http_client(timeout)?;
        Ok(Self { client })
    }
}

/// Builds the HTTP client the fetcher runs on
fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        let parsed_url = Url::parse(url).map_err(|_| FetchError::Malformed {
            url: url.to_string(),
        })?;

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(|error| classify_request_error(url, error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|error| FetchError::Unexpected {
            url: url.to_string(),
            message: error.to_string(),
        })?;

        let parsed = parse_page(&body, url);
        tracing::trace!("Fetched {} ({} links)", url, parsed.links.len());

        Ok(FetchedPage {
            url: url.to_string(),
            title: parsed.title,
            body_text: parsed.body_text,
            links: parsed.links,
        })
    }
}

/// Classifies a transport error into a recoverable fetch failure
fn classify_request_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_builder() {
        FetchError::Malformed { url }
    } else if error.is_connect() {
        FetchError::Unreachable {
            url,
            message: "connection failed".to_string(),
        }
    } else {
        FetchError::Unreachable {
            url,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(Duration::from_secs(3));
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_names_the_crawler() {
        assert!(USER_AGENT.starts_with("lodestone/"));
    }

    #[tokio::test]
    async fn test_malformed_url_is_recoverable() {
        let fetcher = HttpFetcher::new(Duration::from_secs(3)).unwrap();
        let error = fetcher.fetch("not a url").await.unwrap_err();

        assert!(matches!(error, FetchError::Malformed { .. }));
        assert!(error.is_recoverable());
        assert_eq!(error.url(), "not a url");
    }

    #[tokio::test]
    async fn test_empty_url_is_recoverable() {
        let fetcher = HttpFetcher::new(Duration::from_secs(3)).unwrap();
        let error = fetcher.fetch("").await.unwrap_err();

        assert!(matches!(error, FetchError::Malformed { .. }));
        assert!(error.is_recoverable());
    }

    // Network-facing behavior (status codes, timeouts, unreachable hosts)
    // is covered by the wiremock integration tests.
}
