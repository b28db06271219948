use std::fmt::Write;

use crate::checker::{FileReport, Violation};
use crate::error::Result;

use super::OutputFormatter;

/// Message printed for a report with no violations.
pub const CLEAN_MESSAGE: &str = "No bracket errors found.";

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_report(&self, report: &FileReport, output: &mut String) {
        if report.is_clean() {
            let status = self.colorize("PASSED", ansi::GREEN);
            let _ = writeln!(output, "✓ {status}: {}", report.path.display());
            let _ = writeln!(output, "   {CLEAN_MESSAGE}");
            return;
        }

        let status = self.colorize("FAILED", ansi::RED);
        let _ = writeln!(output, "✗ {status}: {}", report.path.display());
        for violation in &report.violations {
            let _ = writeln!(output, "   {}", Self::format_violation(violation));
        }
    }

    fn format_violation(violation: &Violation) -> String {
        let message = violation.kind.message();
        violation.bracket.map_or_else(
            || {
                format!(
                    "line {}, col {}: {message}",
                    violation.position.line, violation.position.column
                )
            },
            |ch| {
                format!(
                    "line {}, col {}: {message} '{ch}'",
                    violation.position.line, violation.position.column
                )
            },
        )
    }

    fn format_summary(&self, total: usize, clean: usize, failed: usize) -> String {
        let clean_str = self.colorize(&clean.to_string(), ansi::GREEN);
        let failed_str = self.colorize(&failed.to_string(), ansi::RED);
        format!("Summary: {total} files checked, {clean_str} clean, {failed_str} with violations")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        let failed: Vec<_> = reports.iter().filter(|r| !r.is_clean()).collect();
        let clean_count = reports.len() - failed.len();

        for report in &failed {
            self.format_report(report, &mut output);
            output.push('\n');
        }

        // Show clean files only in verbose mode
        if self.verbose >= 1 {
            for report in reports.iter().filter(|r| r.is_clean()) {
                self.format_report(report, &mut output);
                output.push('\n');
            }
        }

        let summary = self.format_summary(reports.len(), clean_count, failed.len());
        let _ = writeln!(output, "{summary}");

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
