//! Configuration validation for landing-links.

use super::types::{HttpConfig, OutputConfig, ScrapeConfig, SourceConfig, ValidatorConfig};
use crate::scrape::compile_selector;
use url::Url;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for ValidatorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.sources.validate());
        errors.extend(self.scraping.validate());
        errors.extend(self.http.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for SourceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            ("sources.manifest_url", &self.manifest_url),
            ("sources.landing_page_url", &self.landing_page_url),
            ("sources.site_origin", &self.site_origin),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            Url::parse(value).err().map(|e| ConfigError {
                field: field.to_string(),
                message: format!("Invalid URL '{value}': {e}"),
            })
        })
        .collect()
    }
}

impl Validatable for ScrapeConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Err(e) = compile_selector(&self.container_selector) {
            errors.push(ConfigError {
                field: "scraping.container_selector".to_string(),
                message: e.to_string(),
            });
        }
        errors
    }
}

impl Validatable for HttpConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.timeout_secs == 0 {
            errors.push(ConfigError {
                field: "http.timeout_secs".to_string(),
                message: "Timeout must be greater than zero".to_string(),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            ("output.markdown_report", &self.markdown_report),
            ("output.json_report", &self.json_report),
        ]
        .into_iter()
        .filter(|(_, path)| path.as_os_str().is_empty())
        .map(|(field, _)| ConfigError {
            field: field.to_string(),
            message: "Report path must not be empty".to_string(),
        })
        .collect()
    }
}
