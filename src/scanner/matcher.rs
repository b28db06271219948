//! Stack-based bracket matching over the live character stream.

use crate::checker::{Position, Violation, ViolationKind};
use crate::lexer;

use super::ScanContext;

/// An opening bracket awaiting its closing counterpart.
#[derive(Debug, Clone, Copy)]
struct PendingOpen {
    bracket: char,
    position: Position,
}

/// Scan `lines` and report bracket violations.
///
/// A single left-to-right pass: the scan context classifies each character,
/// live opening brackets are pushed, and a live closing bracket pops the top
/// only when it truly matches. A mismatched or stray closing bracket is
/// reported and leaves the stack untouched, so one stray bracket can cascade
/// into several reports. Whatever remains on the stack at end of input is
/// reported as unmatched.
pub fn scan_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Violation> {
    let mut context = ScanContext::new();
    let mut stack: Vec<PendingOpen> = Vec::new();
    let mut violations = Vec::new();

    for (line_index, line) in lines.iter().enumerate() {
        context.begin_line();
        let chars: Vec<char> = line.as_ref().chars().collect();

        let mut i = 0;
        while i < chars.len() {
            let step = context.step(&chars, i);
            if step.live {
                let position = Position::new(line_index + 1, i + 1);
                process_live_char(chars[i], position, &mut stack, &mut violations);
            }
            i += step.consumed;
        }
    }

    for open in stack {
        violations.push(Violation::bracket(
            open.bracket,
            open.position,
            ViolationKind::UnmatchedOpening,
        ));
    }

    violations
}

fn process_live_char(
    ch: char,
    position: Position,
    stack: &mut Vec<PendingOpen>,
    violations: &mut Vec<Violation>,
) {
    if lexer::is_opening(ch) {
        stack.push(PendingOpen {
            bracket: ch,
            position,
        });
    } else if lexer::is_closing(ch) {
        if stack
            .last()
            .is_some_and(|top| lexer::is_matching_pair(top.bracket, ch))
        {
            stack.pop();
        } else {
            violations.push(Violation::bracket(ch, position, ViolationKind::WrongClosing));
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
