mod policy;
mod violation;

pub use policy::PolicyValidator;
pub use violation::{sort_and_dedup, Position, Violation, ViolationKind};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::scanner;

/// Result of checking one input: its path and the ordered violation set.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

impl FileReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Orchestrates the policy validator and the bracket scan for one input.
pub struct BracketChecker {
    config: Config,
}

impl BracketChecker {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Check a sequence of raw lines.
    ///
    /// Policy checks run first; a program-length violation short-circuits
    /// the bracket scan entirely. The returned set is sorted by
    /// (line, column, bracket, kind) and deduplicated.
    #[must_use]
    pub fn check_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Violation> {
        let validator = PolicyValidator::new(&self.config);
        let mut violations = validator.validate(lines);

        let program_too_long = violations
            .iter()
            .any(|v| v.kind == ViolationKind::ProgramTooLong);
        if !program_too_long {
            violations.extend(scanner::scan_lines(lines));
        }

        sort_and_dedup(&mut violations);
        violations
    }

    /// Check raw lines read from `path`, producing a per-file report.
    #[must_use]
    pub fn check_file<S: AsRef<str>>(&self, path: &Path, lines: &[S]) -> FileReport {
        FileReport {
            path: path.to_path_buf(),
            violations: self.check_lines(lines),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
