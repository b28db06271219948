//! Formatting-policy checks over raw, unscanned lines.

use crate::config::Config;

use super::{Position, Violation, ViolationKind};

/// Validates raw lines against the configured formatting policy.
///
/// Runs independently of (and before) bracket matching. The program-length
/// check short-circuits everything else: an oversized input is not worth
/// analyzing further. Line-length and directive checks are per-line and do
/// not suppress each other.
pub struct PolicyValidator<'a> {
    config: &'a Config,
}

impl<'a> PolicyValidator<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Check `lines`, returning all policy violations.
    ///
    /// When the line count reaches the ceiling the result is exactly one
    /// `ProgramTooLong` record at (count, 1); callers must not run any
    /// further analysis in that case.
    #[must_use]
    pub fn validate<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Violation> {
        if lines.len() >= self.config.max_line_count {
            return vec![Violation::policy(
                Position::new(lines.len(), 1),
                ViolationKind::ProgramTooLong,
            )];
        }

        let mut violations = Vec::new();
        for (line_index, line) in lines.iter().enumerate() {
            self.check_line(line.as_ref(), line_index + 1, &mut violations);
        }
        violations
    }

    fn check_line(&self, line: &str, line_number: usize, violations: &mut Vec<Violation>) {
        if line.chars().count() >= self.config.max_line_length {
            violations.push(Violation::policy(
                Position::new(line_number, self.config.max_line_length + 1),
                ViolationKind::LineTooLong,
            ));
        }

        if let Some(byte_pos) = line.find(&self.config.disallowed_directive) {
            // Report the column in characters, echoing the directive's
            // first character in the record.
            let column = line[..byte_pos].chars().count() + 1;
            let first = self
                .config
                .disallowed_directive
                .chars()
                .next()
                .unwrap_or('#');
            violations.push(Violation::bracket(
                first,
                Position::new(line_number, column),
                ViolationKind::DisallowedDirective,
            ));
        }
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
