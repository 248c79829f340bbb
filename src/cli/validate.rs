//! Validate command handler.
//!
//! Runs the full pipeline, prints the console summary, and writes both
//! report files.

use crate::config::{Validatable, ValidatorConfig};
use crate::error::LinkCheckError;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::model::ValidationRun;
use crate::pipeline::{
    OutputTarget, PipelineError, exit_code_for, exit_codes, should_use_color, validate,
    write_output, write_reports,
};
use crate::reports::{ReportGenerator, SummaryReporter};
use anyhow::{Context, Result};

/// Run the validator with a live HTTP client.
///
/// Returns the process exit code.
pub fn run_validate(config: &ValidatorConfig) -> Result<i32> {
    let problems = config.validate();
    if !problems.is_empty() {
        let message = problems
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(LinkCheckError::config(message).into());
    }

    let fetcher =
        HttpFetcher::new(&config.fetcher_config()).context("Failed to build HTTP client")?;
    run_with_fetcher(config, &fetcher)
}

/// Run the validator against any [`PageFetcher`].
///
/// The same fetcher is used for the liveness probes while rendering the
/// Markdown report.
pub fn run_with_fetcher(config: &ValidatorConfig, fetcher: &dyn PageFetcher) -> Result<i32> {
    tracing::info!("GroupDocs Landing Page Links Validator");

    let mut run = ValidationRun::new(config.sources.landing_page_url.clone());
    match validate(config, fetcher, &mut run) {
        Ok(()) => {}
        Err(PipelineError::ManifestFailed { .. }) => {
            tracing::error!("❌ Failed to fetch product data");
            return Ok(exit_codes::VALIDATION_FAILED);
        }
        Err(PipelineError::LandingPageFailed(_)) => {
            tracing::error!("❌ Failed to parse landing page");
            return Ok(exit_codes::VALIDATION_FAILED);
        }
        Err(e) => return Err(e.into()),
    }

    if !config.behavior.quiet {
        print_summary(&run, config)?;
    }
    write_reports(&run, config, fetcher)?;

    Ok(exit_code_for(&run))
}

fn print_summary(run: &ValidationRun, config: &ValidatorConfig) -> Result<()> {
    let target = OutputTarget::Stdout;
    let mut reporter = SummaryReporter::new();
    if !should_use_color(config.output.no_color) || !target.is_terminal() {
        reporter = reporter.no_color();
    }
    let summary = reporter
        .generate(run)
        .map_err(LinkCheckError::from)
        .with_context(|| format!("Failed to render {} output", reporter.format()))?;
    write_output(&summary, &target)?;
    Ok(())
}
