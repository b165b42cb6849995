//! Whole-word term matching
//!
//! Terms are literals (they may contain spaces or symbols such as `r$` and
//! `100%`), so boundaries are checked explicitly on the characters around a
//! case-insensitive hit instead of relying on `\b`, which cannot anchor a
//! term that begins or ends with a symbol.

use regex::{Regex, RegexBuilder};

/// A compiled prohibited term
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    regex: Regex,
}

impl TermMatcher {
    /// Compile a literal term for case-insensitive matching
    pub fn new(term: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    /// The term as configured
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Check whether the term occurs in `text` as a whole word
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Byte range of the first whole-word occurrence
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        let mut start = 0;

        while start <= text.len() {
            let m = self.regex.find_at(text, start)?;

            if boundary_before(text, m.start()) && boundary_after(text, m.end()) {
                return Some((m.start(), m.end()));
            }

            // Rejected candidate; resume one character later so an
            // overlapping valid occurrence is not skipped.
            start = m.start()
                + text[m.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }

        None
    }
}

/// Word characters: Unicode alphanumerics and underscore
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn boundary_before(text: &str, idx: usize) -> bool {
    text[..idx]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c))
}

fn boundary_after(text: &str, idx: usize) -> bool {
    text[idx..].chars().next().map_or(true, |c| !is_word_char(c))
}
