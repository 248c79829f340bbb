//! Configuration types for landing-links.

use super::defaults::{
    DEFAULT_CONTAINER_SELECTOR, DEFAULT_JSON_REPORT, DEFAULT_LANDING_PAGE_URL,
    DEFAULT_MANIFEST_URL, DEFAULT_MARKDOWN_REPORT, DEFAULT_SITE_ORIGIN, DEFAULT_TIMEOUT_SECS,
};
use crate::fetch::{DEFAULT_MIN_CONTENT_LENGTH, HttpFetcherConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Validator Configuration
// ============================================================================

/// Top-level configuration, loadable from a YAML file and overridable from the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Where the manifest and pages come from
    pub sources: SourceConfig,
    /// How pages are scraped
    pub scraping: ScrapeConfig,
    /// HTTP client settings
    pub http: HttpConfig,
    /// Report destinations
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl ValidatorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `ValidatorConfig` builder.
    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    /// HTTP client settings derived from this configuration.
    #[must_use]
    pub fn fetcher_config(&self) -> HttpFetcherConfig {
        HttpFetcherConfig {
            timeout: Duration::from_secs(self.http.timeout_secs),
            ..HttpFetcherConfig::default()
        }
    }
}

/// Remote locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub manifest_url: String,
    pub landing_page_url: String,
    /// Base for resolving relative hrefs
    pub site_origin: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            landing_page_url: DEFAULT_LANDING_PAGE_URL.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
        }
    }
}

/// Scraping rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// CSS selector for product containers on the landing page
    pub container_selector: String,
    /// Minimum trimmed body length for a page to count as non-empty
    pub min_content_length: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Report destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub markdown_report: PathBuf,
    pub json_report: PathBuf,
    /// Disable ANSI colors in the console summary
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            markdown_report: PathBuf::from(DEFAULT_MARKDOWN_REPORT),
            json_report: PathBuf::from(DEFAULT_JSON_REPORT),
            no_color: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress the console summary
    pub quiet: bool,
}

// ============================================================================
// Builder for ValidatorConfig
// ============================================================================

/// Builder for constructing `ValidatorConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    pub fn manifest_url(mut self, url: impl Into<String>) -> Self {
        self.config.sources.manifest_url = url.into();
        self
    }

    pub fn landing_page_url(mut self, url: impl Into<String>) -> Self {
        self.config.sources.landing_page_url = url.into();
        self
    }

    pub fn site_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.sources.site_origin = origin.into();
        self
    }

    pub fn container_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.scraping.container_selector = selector.into();
        self
    }

    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.http.timeout_secs = secs;
        self
    }

    /// Place both reports in `dir`, keeping their file names.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.config.output.markdown_report = dir.join(DEFAULT_MARKDOWN_REPORT);
        self.config.output.json_report = dir.join(DEFAULT_JSON_REPORT);
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_fixed_constants() {
        let config = ValidatorConfig::default();
        assert_eq!(config.sources.landing_page_url, "https://products.groupdocs.com/");
        assert_eq!(config.sources.site_origin, "https://products.groupdocs.com");
        assert!(config.sources.manifest_url.ends_with("product_versions.json"));
        assert_eq!(config.scraping.min_content_length, 100);
        assert_eq!(config.output.markdown_report, PathBuf::from("validation_report.md"));
        assert_eq!(config.output.json_report, PathBuf::from("product_links.json"));
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::builder()
            .landing_page_url("http://localhost:8080/")
            .timeout_secs(5)
            .output_dir("/tmp/out")
            .quiet(true)
            .build();
        assert_eq!(config.sources.landing_page_url, "http://localhost:8080/");
        assert_eq!(config.fetcher_config().timeout, Duration::from_secs(5));
        assert_eq!(
            config.output.json_report,
            PathBuf::from("/tmp/out/product_links.json")
        );
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ValidatorConfig =
            serde_yaml::from_str("http:\n  timeout_secs: 10\n").unwrap();
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.scraping, ScrapeConfig::default());
    }
}
