//! Blocking HTTP client.

use super::{FetchedPage, PageFetcher};
use crate::error::{FetchErrorKind, LinkCheckError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum redirects followed per request
    pub max_redirects: usize,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_redirects: 10,
        }
    }
}

/// [`PageFetcher`] backed by `reqwest`. One request in flight at a time, no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher.
    pub fn new(config: &HttpFetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| LinkCheckError::network("client setup", e))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| LinkCheckError::network(url, e))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            LinkCheckError::fetch(
                format!("reading {url}"),
                FetchErrorKind::BodyError(e.to_string()),
            )
        })?;

        Ok(FetchedPage { status, body })
    }
}
