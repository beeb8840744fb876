//! Quote-aware tokenization of raw input lines (no I/O operations)
//!
//! The scanner has two states: outside quotes, a space ends the current
//! token; inside quotes, everything up to the closing `"` belongs to the
//! token, spaces included. Tokenization is total - malformed input degrades
//! to a best-effort token list instead of an error.

/// Lazy iterator over the tokens of one input line.
///
/// Produced by [`tokenize`]. Tokens borrow from the input; quotes are not
/// part of the token they delimit.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

/// Scanner state for the token currently being consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Token runs to the next space or end of input
    Unquoted,
    /// Token runs to the closing `"` or end of input
    Quoted,
}

/// Split a raw string into tokens, treating `"..."` spans as single tokens.
///
/// - Spaces outside quotes separate tokens; runs of spaces produce nothing.
/// - A `"` at a token boundary opens a quoted token; the quoted content is
///   one token regardless of embedded spaces. An unterminated quote closes
///   silently at end of input.
/// - `""` yields an empty-string token; empty input yields no tokens.
///
/// ```
/// use bfm_core::tokenize;
///
/// let tokens: Vec<&str> = tokenize(r#"-src "my folder" -dst out"#).collect();
/// assert_eq!(tokens, ["-src", "my folder", "-dst", "out"]);
/// ```
pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer { rest: input }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.rest = self.rest.trim_start_matches(' ');

        let state = match self.rest.chars().next() {
            None => return None,
            Some('"') => ScanState::Quoted,
            Some(_) => ScanState::Unquoted,
        };

        match state {
            ScanState::Quoted => {
                let body = &self.rest[1..];
                // Unterminated quote: consume to end of input, no error.
                match body.find('"') {
                    None => {
                        self.rest = "";
                        Some(body)
                    }
                    Some(close) => {
                        self.rest = &body[close + 1..];
                        Some(&body[..close])
                    }
                }
            }
            ScanState::Unquoted => {
                let end = self.rest.find(' ').unwrap_or(self.rest.len());
                let token = &self.rest[..end];
                self.rest = &self.rest[end..];
                Some(token)
            }
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}
