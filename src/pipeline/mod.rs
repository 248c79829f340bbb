//! Pipeline orchestration for a validation run.
//!
//! A run moves through manifest → landing page → family pages → reports.
//! Each stage records its findings on the shared [`ValidationRun`]; only the
//! first two stages can abort the run.

mod family_stage;
mod landing_stage;
mod manifest_stage;
mod output;
mod report_stage;

pub use family_stage::{FamilyPageCheck, check_family_page, validate_family_pages};
pub use landing_stage::{LandingPageError, cross_reference, load_landing_page, scrape_landing_stage};
pub use manifest_stage::{load_manifest, manifest_stage};
pub use output::{OutputTarget, should_use_color, write_output};
pub use report_stage::{ReportPaths, write_reports};

use crate::config::ValidatorConfig;
use crate::error::LinkCheckError;
use crate::fetch::PageFetcher;
use crate::model::ValidationRun;
use url::Url;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The product manifest could not be fetched or decoded
    #[error("Failed to fetch JSON: {reason}")]
    ManifestFailed { reason: String },

    /// The landing page could not be fetched or scraped
    #[error(transparent)]
    LandingPageFailed(#[from] LandingPageError),

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: LinkCheckError,
    },

    /// The configuration cannot drive a run
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no errors recorded
    pub const SUCCESS: i32 = 0;
    /// Errors were recorded, or the run aborted
    pub const VALIDATION_FAILED: i32 = 1;
}

/// Run every validation stage against `run`, stopping at the first fatal one.
///
/// Non-fatal problems end up in `run.findings`; fatal ones are recorded
/// there as well before the error is returned.
pub fn validate(
    config: &ValidatorConfig,
    fetcher: &dyn PageFetcher,
    run: &mut ValidationRun,
) -> Result<(), PipelineError> {
    let origin = Url::parse(&config.sources.site_origin)
        .map_err(|e| PipelineError::InvalidConfig(format!("site origin: {e}")))?;

    manifest_stage(run, fetcher, &config.sources.manifest_url)?;
    scrape_landing_stage(run, fetcher, config, &origin)?;
    validate_family_pages(run, fetcher, &origin, config.scraping.min_content_length);
    Ok(())
}

/// Run a full validation with a fresh [`ValidationRun`].
pub fn run_validation(
    config: &ValidatorConfig,
    fetcher: &dyn PageFetcher,
) -> Result<ValidationRun, PipelineError> {
    let mut run = ValidationRun::new(config.sources.landing_page_url.clone());
    validate(config, fetcher, &mut run)?;
    Ok(run)
}

/// Exit code for a finished run.
#[must_use]
pub fn exit_code_for(run: &ValidationRun) -> i32 {
    if run.passed() {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    }
}
