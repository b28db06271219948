//! Comment and string-literal context tracking.
//!
//! `ScanContext` walks a line character-by-character and classifies each
//! position as live (subject to bracket analysis) or suppressed (inside a
//! comment or string/char literal). Block-comment state persists across
//! lines; line-comment and string state reset at every new line, since a
//! string literal is assumed never to span a raw line break.

/// Classification of a single step through the character stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Number of characters consumed (1, or 2 for a comment token).
    pub consumed: usize,
    /// Whether the character at the current position is live.
    pub live: bool,
}

impl Step {
    const fn live() -> Self {
        Self {
            consumed: 1,
            live: true,
        }
    }

    const fn suppressed(consumed: usize) -> Self {
        Self {
            consumed,
            live: false,
        }
    }
}

/// Normalize a quote character to its straight delimiter, if it is one.
///
/// Curly Unicode variants map onto their straight counterparts, so a string
/// opened with `“` is closed by either `”` or `"`.
const fn normalize_quote(ch: char) -> Option<char> {
    match ch {
        '"' | '\u{201C}' | '\u{201D}' => Some('"'),
        '\'' | '\u{2018}' | '\u{2019}' => Some('\''),
        _ => None,
    }
}

/// Mutable scan state for one pass over a source text.
///
/// Created fresh per scan; owned exclusively by the scan loop.
#[derive(Debug, Default)]
pub struct ScanContext {
    in_block_comment: bool,
    in_line_comment: bool,
    /// Active string/char delimiter, normalized to `"` or `'`.
    string_delimiter: Option<char>,
}

impl ScanContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_block_comment: false,
            in_line_comment: false,
            string_delimiter: None,
        }
    }

    /// Reset per-line state at the start of a new line.
    ///
    /// Block-comment state is the only state that survives a line break.
    pub const fn begin_line(&mut self) {
        self.in_line_comment = false;
        self.string_delimiter = None;
    }

    #[must_use]
    pub const fn in_comment(&self) -> bool {
        self.in_block_comment || self.in_line_comment
    }

    /// Classify the character at `i`, advancing internal state.
    ///
    /// Returns how many characters were consumed (a two-character comment
    /// token is consumed atomically, with no bracket check on either
    /// character) and whether the position is live.
    pub fn step(&mut self, chars: &[char], i: usize) -> Step {
        // Comment transitions are only recognized outside string/char
        // literals. A comment in turn suppresses quote recognition, so the
        // two states are mutually exclusive.
        debug_assert!(!(self.in_comment() && self.string_delimiter.is_some()));

        if self.string_delimiter.is_none() {
            let next = chars.get(i + 1).copied();

            if self.in_block_comment {
                if chars[i] == '*' && next == Some('/') {
                    self.in_block_comment = false;
                    return Step::suppressed(2);
                }
                return Step::suppressed(1);
            }

            if self.in_line_comment {
                return Step::suppressed(1);
            }

            if chars[i] == '/' {
                match next {
                    Some('/') => {
                        self.in_line_comment = true;
                        return Step::suppressed(2);
                    }
                    Some('*') => {
                        self.in_block_comment = true;
                        return Step::suppressed(2);
                    }
                    _ => {}
                }
            }
        }

        match self.string_delimiter {
            None => normalize_quote(chars[i]).map_or_else(Step::live, |delim| {
                self.string_delimiter = Some(delim);
                Step::suppressed(1)
            }),
            Some(active) => {
                if normalize_quote(chars[i]) == Some(active) {
                    self.string_delimiter = None;
                }
                Step::suppressed(1)
            }
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
