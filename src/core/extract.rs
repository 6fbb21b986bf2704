//! Quoted identifier extraction.
//!
//! Finds string literals that look like translation paths:
//!
//! ```text
//! 'tour.start'            -> tour.start
//! "errors.E-001"          -> errors.E-001
//! `status.$code`          -> status
//! t('menu.' + item)       -> menu
//! ```
//!
//! The same quote character must open and close the literal. The pattern is
//! a shared `Regex`, but every call creates its own iterator, so repeated
//! scans of the same text always start from the beginning.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::core::catalog::locate::{build_line_index, offset_to_line};

/// Paths never reported as candidates.
pub const RESERVED_IDENTIFIERS: &[&str] = &["constructor"];

// No backreferences in `regex`: quote symmetry is checked after matching.
static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(['"`])([A-Za-z0-9._-]+)(?:\.\$[^'"`\n]*)?(['"`])"#).unwrap()
});

/// A translation path candidate found in source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierCandidate {
    pub path: String,
    /// Byte offset of the path (after the opening quote).
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub col: usize,
}

/// Lazily extract candidates from `text`.
pub fn extract(text: &str) -> Candidates<'_> {
    Candidates {
        text,
        cursor: 0,
        line_index: build_line_index(text),
    }
}

pub fn is_reserved_identifier(path: &str) -> bool {
    RESERVED_IDENTIFIERS.contains(&path)
}

/// Iterator over the candidates of one text. See [`extract`].
pub struct Candidates<'a> {
    text: &'a str,
    cursor: usize,
    line_index: Vec<usize>,
}

impl Candidates<'_> {
    fn candidate_from(&self, caps: &Captures<'_>) -> Option<IdentifierCandidate> {
        let ident = caps.get(2)?;
        let path = ident.as_str().strip_suffix('.').unwrap_or(ident.as_str());
        if path.is_empty() || is_reserved_identifier(path) {
            return None;
        }

        let offset = ident.start();
        let line = offset_to_line(&self.line_index, offset);
        let line_start = self.line_index[line - 1];
        let col = self.text[line_start..offset].chars().count() + 1;

        Some(IdentifierCandidate {
            path: path.to_string(),
            offset,
            line,
            col,
        })
    }
}

impl Iterator for Candidates<'_> {
    type Item = IdentifierCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.text.len() {
            let caps = IDENTIFIER_REGEX.captures_at(self.text, self.cursor)?;
            let whole = caps.get(0)?;
            let open = caps.get(1)?.as_str();
            let close = caps.get(3)?.as_str();

            if open != close {
                // Quotes are single bytes, so this stays on a char boundary.
                self.cursor = whole.start() + 1;
                continue;
            }

            self.cursor = whole.end();
            if let Some(candidate) = self.candidate_from(&caps) {
                return Some(candidate);
            }
        }
        None
    }
}
