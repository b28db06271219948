//! Bracket classification predicates.
//!
//! Pure and total over all characters: non-bracket input yields `false`.

#[must_use]
pub const fn is_opening(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

#[must_use]
pub const fn is_closing(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

/// True only for the three canonical pairs `()`, `[]`, `{}`.
#[must_use]
pub const fn is_matching_pair(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}'))
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
