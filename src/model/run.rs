//! Run-scoped validation context.

use super::{FoundLinks, Manifest};
use chrono::{DateTime, Utc};

/// Errors and warnings accumulated over a run, in the order they occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Findings {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// State threaded through every pipeline stage.
///
/// Constructed once per invocation; each stage borrows it mutably in turn and
/// the reporters consume it read-only at the end.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    /// Landing page that was validated
    pub landing_page_url: String,
    /// Products under validation
    pub manifest: Manifest,
    /// Links discovered on the landing page and family pages
    pub found: FoundLinks,
    /// Accumulated findings
    pub findings: Findings,
    /// Timestamp stamped into both report artifacts
    pub generated_at: DateTime<Utc>,
}

impl ValidationRun {
    /// Start a run stamped with the current time.
    #[must_use]
    pub fn new(landing_page_url: impl Into<String>) -> Self {
        Self::at(landing_page_url, Utc::now())
    }

    /// Start a run with an explicit timestamp.
    #[must_use]
    pub fn at(landing_page_url: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            landing_page_url: landing_page_url.into(),
            manifest: Manifest::default(),
            found: FoundLinks::default(),
            findings: Findings::default(),
            generated_at,
        }
    }

    /// Whether the run should exit successfully.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.findings.has_errors()
    }
}
