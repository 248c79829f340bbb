//! **Link validation for the GroupDocs products landing page.**
//!
//! `landing-links` cross-checks a product version manifest against the
//! products landing page and each product's family page, then writes a
//! Markdown table of every discovered link (with its live status) and a JSON
//! index of the same links.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the run context. A [`ValidationRun`] carries the
//!   filtered [`Manifest`], the [`FoundLinks`] index and the accumulated
//!   [`Findings`] from stage to stage.
//! - **[`matching`]**: product name normalization ([`ProductSlugs`]) and the
//!   platform vocabulary shared by the scraper and the reports.
//! - **[`fetch`]**: the [`PageFetcher`] seam and its `reqwest` implementation.
//! - **[`scrape`]**: candidate hrefs from parsed HTML and the href patterns
//!   that classify them.
//! - **[`pipeline`]**: the stages, run in order by [`pipeline::validate`].
//! - **[`reports`]**: Markdown, JSON and console summary generators.
//!
//! ## Getting Started
//!
//! ```no_run
//! use landing_links::{HttpFetcher, ValidatorConfig, pipeline};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ValidatorConfig::default();
//!     let fetcher = HttpFetcher::new(&config.fetcher_config())?;
//!     let run = pipeline::run_validation(&config, &fetcher)?;
//!
//!     for error in &run.findings.errors {
//!         println!("{error}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Testing without the network
//!
//! Every stage takes a `&dyn PageFetcher`, so canned pages can stand in for
//! the live site:
//!
//! ```
//! use landing_links::error::{LinkCheckError, Result};
//! use landing_links::{FetchedPage, PageFetcher};
//!
//! struct Offline;
//!
//! impl PageFetcher for Offline {
//!     fn fetch(&self, url: &str) -> Result<FetchedPage> {
//!         Err(LinkCheckError::network(url, "offline"))
//!     }
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `slug`/`slugs` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod matching;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scrape;

// Re-export main types for convenience
pub use config::{ConfigError, Validatable, ValidatorConfig, ValidatorConfigBuilder};
pub use error::{ErrorContext, LinkCheckError, Result};
pub use fetch::{
    FetchedPage, HttpFetcher, HttpFetcherConfig, LinkStatus, PageFetcher, probe_link,
};
pub use matching::{ProductSlugs, normalize_product_name, should_ignore_product};
pub use model::{FamilyPageValidation, Findings, FoundLinks, Manifest, ValidationRun};
pub use pipeline::{PipelineError, run_validation};
pub use reports::{
    JsonReporter, MarkdownReporter, ReportFormat, ReportGenerator, SummaryReporter,
};
pub use scrape::{LandingLinks, PageDocument};
