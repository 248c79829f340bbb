//! Report type definitions.

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable Markdown table of links
    #[default]
    Markdown,
    /// JSON link index mirroring the manifest layout
    Json,
    /// Console summary of findings
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Cell glyph for a link that passed the liveness check.
pub const VALID_MARK: &str = "✓";
