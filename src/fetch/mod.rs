//! Page fetching and link liveness.
//!
//! All network access goes through the [`PageFetcher`] trait so that the
//! pipeline can be driven from canned responses in tests.

mod client;

pub use client::{HttpFetcher, HttpFetcherConfig};

use crate::error::Result;

/// Minimum trimmed body length, in characters, for a page to count as non-empty.
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 100;

/// A fetched page. Any HTTP status is a successful fetch at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the trimmed body has at least `min_length` characters.
    #[must_use]
    pub fn has_content(&self, min_length: usize) -> bool {
        self.body.trim().chars().count() >= min_length
    }
}

/// Source of pages.
pub trait PageFetcher {
    /// GET `url`, following redirects.
    ///
    /// Returns `Err` only when no response was received (DNS, TLS, timeout,
    /// unreadable body).
    fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// Point-in-time liveness of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStatus {
    /// HTTP status, or 0 when the request failed outright
    pub status: u16,
    pub valid: bool,
}

/// Probe a URL: valid iff status is 200 and the trimmed body reaches `min_length`.
pub fn probe_link(fetcher: &dyn PageFetcher, url: &str, min_length: usize) -> LinkStatus {
    match fetcher.fetch(url) {
        Ok(page) => LinkStatus {
            status: page.status,
            valid: page.is_ok() && page.has_content(min_length),
        },
        Err(e) => {
            tracing::debug!("Liveness probe failed for {}: {}", url, e);
            LinkStatus {
                status: 0,
                valid: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkCheckError;

    struct Fixed(Option<FetchedPage>);

    impl PageFetcher for Fixed {
        fn fetch(&self, url: &str) -> Result<FetchedPage> {
            self.0
                .clone()
                .ok_or_else(|| LinkCheckError::network(url, "connection refused"))
        }
    }

    fn page(status: u16, body: &str) -> Fixed {
        Fixed(Some(FetchedPage {
            status,
            body: body.to_string(),
        }))
    }

    #[test]
    fn test_probe_valid_page() {
        let fetcher = page(200, &"x".repeat(100));
        let status = probe_link(&fetcher, "https://example.com/", 100);
        assert_eq!(status, LinkStatus { status: 200, valid: true });
    }

    #[test]
    fn test_probe_short_body_is_invalid() {
        let body = format!("   {}   ", "x".repeat(99));
        let status = probe_link(&page(200, &body), "https://example.com/", 100);
        assert_eq!(status, LinkStatus { status: 200, valid: false });
    }

    #[test]
    fn test_probe_server_error_keeps_status() {
        let status = probe_link(&page(500, &"x".repeat(500)), "https://example.com/", 100);
        assert_eq!(status, LinkStatus { status: 500, valid: false });
    }

    #[test]
    fn test_probe_network_failure_is_zero() {
        let status = probe_link(&Fixed(None), "https://example.com/", 100);
        assert_eq!(status, LinkStatus { status: 0, valid: false });
    }

    #[test]
    fn test_content_length_counts_characters() {
        let page = FetchedPage {
            status: 200,
            body: "é".repeat(100),
        };
        assert!(page.has_content(100));
        assert!(page.is_success());
    }
}
