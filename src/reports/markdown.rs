//! Markdown report generator.
//!
//! Renders one table row per manifest product with a family column and one
//! column per platform. Every discovered URL is probed again at render time,
//! so a cell shows either a checkmark or the status code the URL returns now.

use super::escape::{escape_markdown_table, escape_markdown_url};
use super::{ReportError, ReportFormat, ReportGenerator, VALID_MARK};
use crate::fetch::{DEFAULT_MIN_CONTENT_LENGTH, PageFetcher, probe_link};
use crate::matching::{ProductSlugs, platform_header, platform_slug, sort_platforms};
use crate::model::{ValidationRun, available_platforms};

const TITLE: &str = "# GroupDocs Landing Page Links Validation Report";

/// Markdown reporter
pub struct MarkdownReporter<'a> {
    probe: &'a dyn PageFetcher,
    min_content_length: usize,
}

impl<'a> MarkdownReporter<'a> {
    /// Create a reporter that checks liveness through `probe`.
    #[must_use]
    pub fn new(probe: &'a dyn PageFetcher) -> Self {
        Self {
            probe,
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
        }
    }

    /// Set the minimum body length for a link to count as live.
    #[must_use]
    pub const fn min_content_length(mut self, min_content_length: usize) -> Self {
        self.min_content_length = min_content_length;
        self
    }

    /// Render a link cell, probing the URL first.
    fn link_cell(&self, url: &str) -> String {
        let status = probe_link(self.probe, url, self.min_content_length);
        let label = if status.valid {
            VALID_MARK.to_string()
        } else {
            status.status.to_string()
        };
        format!(" [{label}]({}) |", escape_markdown_url(url))
    }

    fn table(&self, run: &ValidationRun) -> Vec<String> {
        let found = &run.found;
        let expected = run
            .manifest
            .iter()
            .flat_map(|(_, platforms)| available_platforms(platforms).map(platform_slug));
        let platforms = sort_platforms(found.observed_platforms().chain(expected));

        if platforms.is_empty() {
            return vec!["| *No platforms found* |".to_string()];
        }

        let mut header = String::from("| Product | Family Page |");
        let mut separator = String::from("|---------|-------------|");
        for platform in &platforms {
            header.push_str(&format!(" {} |", platform_header(platform)));
            separator.push_str("----------------|");
        }
        let mut lines = vec![header, separator];

        let names = run.manifest.sorted_names();
        if names.is_empty() {
            lines.push(format!(
                "| *No products found* |{}",
                " |".repeat(1 + platforms.len())
            ));
            return lines;
        }

        tracing::info!("Validating links...");
        for name in names {
            let slugs = ProductSlugs::from_name(name);
            let mut row = format!("| {} |", escape_markdown_table(name));

            match found.family_url(&slugs) {
                Some(url) => row.push_str(&self.link_cell(url)),
                None => row.push_str(" |"),
            }
            for platform in &platforms {
                match found.platform_url(&slugs, platform) {
                    Some(url) => row.push_str(&self.link_cell(url)),
                    None => row.push_str(" |"),
                }
            }
            lines.push(row);
        }
        lines
    }
}

impl ReportGenerator for MarkdownReporter<'_> {
    fn generate(&self, run: &ValidationRun) -> Result<String, ReportError> {
        let findings = &run.findings;
        let mut lines = vec![
            TITLE.to_string(),
            String::new(),
            format!(
                "**Generated:** {}",
                run.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            format!("**Landing Page:** {}", run.landing_page_url),
            String::new(),
            "## Summary".to_string(),
            String::new(),
            format!("- **Total Products Validated:** {}", run.manifest.len()),
            format!(
                "- **Product Family Links Found:** {}",
                run.found.family_links.len()
            ),
            format!(
                "- **Product Links Found:** {}",
                run.found.platform_link_count()
            ),
            format!("- **Errors:** {}", findings.errors.len()),
            format!("- **Warnings:** {}", findings.warnings.len()),
            String::new(),
            "---".to_string(),
            String::new(),
            "## Product Links".to_string(),
            String::new(),
        ];

        lines.extend(self.table(run));

        if !findings.errors.is_empty() {
            lines.extend([String::new(), "## Errors".to_string(), String::new()]);
            lines.extend(findings.errors.iter().map(|e| format!("- ❌ {e}")));
        }
        if !findings.warnings.is_empty() {
            lines.extend([String::new(), "## Warnings".to_string(), String::new()]);
            lines.extend(findings.warnings.iter().map(|w| format!("- ⚠️ {w}")));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
