//! Configuration module for landing-links.
//!
//! This module provides:
//! - Type-safe configuration structures with the fixed production defaults
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use landing_links::config::{ValidatorConfig, file::load_or_default};
//!
//! // Use defaults
//! let config = ValidatorConfig::default();
//!
//! // Use builder
//! let config = ValidatorConfig::builder()
//!     .landing_page_url("http://localhost:1313/")
//!     .timeout_secs(10)
//!     .build();
//!
//! // Load from file
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.landing-links.yaml` file in your project root or
//! `~/.config/landing-links/`:
//!
//! ```yaml
//! sources:
//!   landing_page_url: https://products.groupdocs.com/
//! scraping:
//!   container_selector: div.product-item
//! http:
//!   timeout_secs: 30
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_CONTAINER_SELECTOR, DEFAULT_JSON_REPORT, DEFAULT_LANDING_PAGE_URL,
    DEFAULT_MANIFEST_URL, DEFAULT_MARKDOWN_REPORT, DEFAULT_SITE_ORIGIN, DEFAULT_TIMEOUT_SECS,
};
pub use file::{ConfigFileError, ConfigOverrides, load_or_default};
pub use types::{
    BehaviorConfig, HttpConfig, OutputConfig, ScrapeConfig, SourceConfig, ValidatorConfig,
    ValidatorConfigBuilder,
};
pub use validation::{ConfigError, Validatable};
