//! Console summary generator.
//!
//! Provides a compact, human-readable summary of findings for the terminal.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::ValidationRun;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, run: &ValidationRun) -> Result<String, ReportError> {
        let findings = &run.findings;
        let rule = "=".repeat(60);
        let mut lines = vec![
            rule.clone(),
            self.color("Validation Summary", "bold"),
            rule,
        ];

        if !findings.errors.is_empty() {
            lines.push(String::new());
            lines.push(self.color(
                &format!("❌ Errors ({}):", findings.errors.len()),
                "red",
            ));
            lines.extend(findings.errors.iter().map(|e| format!("  - {e}")));
        }

        if !findings.warnings.is_empty() {
            lines.push(String::new());
            lines.push(self.color(
                &format!("⚠️  Warnings ({}):", findings.warnings.len()),
                "yellow",
            ));
            lines.extend(findings.warnings.iter().map(|w| format!("  - {w}")));
        }

        if findings.is_clean() {
            lines.push(String::new());
            lines.push(self.color("✅ All validations passed!", "green"));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_run() {
        let run = ValidationRun::new("https://products.groupdocs.com/");
        let summary = SummaryReporter::new().no_color().generate(&run).unwrap();
        assert!(summary.contains("Validation Summary"));
        assert!(summary.ends_with("✅ All validations passed!"));
        assert!(!summary.contains("Errors"));
    }

    #[test]
    fn test_errors_and_warnings_listed() {
        let mut run = ValidationRun::new("https://products.groupdocs.com/");
        run.findings.error("first");
        run.findings.error("second");
        run.findings.warning("heads up");

        let summary = SummaryReporter::new().no_color().generate(&run).unwrap();
        assert!(summary.contains("❌ Errors (2):\n  - first\n  - second"));
        assert!(summary.contains("⚠️  Warnings (1):\n  - heads up"));
        assert!(!summary.contains("All validations passed"));
    }

    #[test]
    fn test_color_codes() {
        let mut run = ValidationRun::new("https://products.groupdocs.com/");
        run.findings.error("boom");
        let summary = SummaryReporter::new().generate(&run).unwrap();
        assert!(summary.contains("\x1b[31m"));
    }
}
