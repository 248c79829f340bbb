//! Report generation for validation runs.
//!
//! This module provides the output formats for a finished run:
//! - Markdown: table of discovered links with live status, plus findings
//! - JSON: link index in the manifest's own layout
//! - Summary: console listing of errors and warnings
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Product names and scraped URLs are escaped before they are embedded in
//! the Markdown table.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::{JsonReporter, ProductLinks, build_link_index};
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, VALID_MARK};

use crate::error::{LinkCheckError, ReportErrorKind};
use crate::model::ValidationRun;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ReportError> for LinkCheckError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::SerializationError(message) => Self::report(
                "serializing report",
                ReportErrorKind::JsonSerializationError(message),
            ),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a finished run
    fn generate(&self, run: &ValidationRun) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}
