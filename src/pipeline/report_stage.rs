//! Report output stage.
//!
//! Renders the Markdown table and the JSON link index for a finished run
//! and writes both to their configured paths.

use super::{OutputTarget, PipelineError, write_output};
use crate::config::ValidatorConfig;
use crate::error::{ErrorContext, LinkCheckError};
use crate::fetch::PageFetcher;
use crate::model::ValidationRun;
use crate::reports::{JsonReporter, MarkdownReporter, ReportGenerator};
use std::path::{Path, PathBuf};

/// Where the artifacts of a run were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub markdown: PathBuf,
    pub json: PathBuf,
}

fn render_to(
    reporter: &dyn ReportGenerator,
    run: &ValidationRun,
    path: &Path,
) -> Result<(), LinkCheckError> {
    let content = reporter
        .generate(run)
        .with_context(|| format!("rendering {} report", reporter.format()))?;
    write_output(&content, &OutputTarget::File(path.to_path_buf()))
}

/// Write the Markdown and JSON reports for `run`.
///
/// Every discovered link is probed again through `probe` while the
/// Markdown table is rendered.
pub fn write_reports(
    run: &ValidationRun,
    config: &ValidatorConfig,
    probe: &dyn PageFetcher,
) -> Result<ReportPaths, PipelineError> {
    let paths = ReportPaths {
        markdown: config.output.markdown_report.clone(),
        json: config.output.json_report.clone(),
    };

    let markdown =
        MarkdownReporter::new(probe).min_content_length(config.scraping.min_content_length);
    render_to(&markdown, run, &paths.markdown)
        .map_err(|source| PipelineError::ReportFailed { source })?;
    tracing::info!("📄 Markdown report generated: {}", paths.markdown.display());

    render_to(&JsonReporter::new(), run, &paths.json)
        .map_err(|source| PipelineError::ReportFailed { source })?;
    tracing::info!("📄 JSON output generated: {}", paths.json.display());

    Ok(paths)
}
