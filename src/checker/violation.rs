use serde::Serialize;

/// 1-based location of a character in the source text.
///
/// Columns count characters, not bytes, so multi-byte characters occupy a
/// single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Category of a reported violation.
///
/// Variant order defines the tiebreak used when two violations share a
/// position and bracket character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Closing bracket with an empty stack or a mismatched stack top.
    WrongClosing,
    /// Opening bracket never closed by end of input.
    UnmatchedOpening,
    /// Total line count reached the configured ceiling.
    ProgramTooLong,
    /// A line's length reached the configured ceiling.
    LineTooLong,
    /// A line contains the disallowed preprocessor directive.
    DisallowedDirective,
}

impl ViolationKind {
    /// Human-readable message for this kind, used by the text reporter.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::WrongClosing => "wrong closing bracket",
            Self::UnmatchedOpening => "unmatched opening bracket",
            Self::ProgramTooLong => "program exceeds the maximum line count",
            Self::LineTooLong => "line exceeds the maximum length",
            Self::DisallowedDirective => "disallowed preprocessor directive",
        }
    }
}

/// A single reported finding.
///
/// Field order matters: the derived `Ord` gives the (line, column, bracket,
/// kind) sort used for deterministic output. `bracket` is `None` for policy
/// violations that implicate no specific character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Violation {
    #[serde(flatten)]
    pub position: Position,
    pub bracket: Option<char>,
    pub kind: ViolationKind,
}

impl Violation {
    /// A bracket violation implicating the character `bracket`.
    #[must_use]
    pub const fn bracket(bracket: char, position: Position, kind: ViolationKind) -> Self {
        Self {
            position,
            bracket: Some(bracket),
            kind,
        }
    }

    /// A policy violation with no implicated character.
    #[must_use]
    pub const fn policy(position: Position, kind: ViolationKind) -> Self {
        Self {
            position,
            bracket: None,
            kind,
        }
    }

    #[must_use]
    pub const fn is_policy(&self) -> bool {
        matches!(
            self.kind,
            ViolationKind::ProgramTooLong
                | ViolationKind::LineTooLong
                | ViolationKind::DisallowedDirective
        )
    }
}

/// Sort by (line, column, bracket, kind) and drop adjacent duplicates.
///
/// Output is deterministic and duplicate-free regardless of the order in
/// which violations were discovered.
pub fn sort_and_dedup(violations: &mut Vec<Violation>) {
    violations.sort_unstable();
    violations.dedup();
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
