//! Common utility functions shared across the codebase.

use unicode_width::UnicodeWidthChar;

/// Checks if a character may appear inside a translation identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Checks if the text is a translation identifier (`[A-Za-z0-9._-]+`).
///
/// # Examples
///
/// ```
/// use glossa::utils::is_translation_identifier;
///
/// assert!(is_translation_identifier("tour.start"));
/// assert!(is_translation_identifier("errors.E-001_x"));
/// assert!(!is_translation_identifier(""));
/// assert!(!is_translation_identifier("hello world"));
/// assert!(!is_translation_identifier("'quoted'"));
/// ```
pub fn is_translation_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_identifier_char)
}

/// The identifier surrounding a cursor position on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSelection {
    pub value: String,
    pub is_identifier: bool,
}

/// Expand a 0-based character column on `line` to the identifier run around it.
///
/// A cursor placed directly after an identifier (e.g. on the closing quote)
/// still selects that identifier.
pub fn identifier_at(line: &str, column: usize) -> IdentifierSelection {
    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return IdentifierSelection {
            value: String::new(),
            is_identifier: false,
        };
    }

    let mut col = column.min(chars.len() - 1);
    if !is_identifier_char(chars[col]) && col > 0 && is_identifier_char(chars[col - 1]) {
        col -= 1;
    }

    let mut start = col;
    while start > 0 && is_identifier_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = col;
    while end < chars.len() && is_identifier_char(chars[end]) {
        end += 1;
    }

    let value: String = chars[start..end].iter().collect();
    let value = value.trim().to_string();
    IdentifierSelection {
        is_identifier: is_translation_identifier(&value),
        value,
    }
}

/// A run of literal text on one line. `start` and `end` are 0-based
/// character columns, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// The literal text around a 0-based character column.
///
/// Inside a tag this is the quoted attribute value under the cursor. In markup
/// text it is the text node between the surrounding `>` and `<`. Elsewhere it
/// is the enclosing quoted string, or the whole line if the line has no quoted
/// string at the cursor. Surrounding whitespace is left out.
pub fn literal_at(line: &str, column: usize) -> Option<TextSpan> {
    let chars: Vec<char> = line.chars().collect();
    if column >= chars.len() {
        return None;
    }

    let last_open = chars[..column].iter().rposition(|&c| c == '<');
    let last_close = chars[..column].iter().rposition(|&c| c == '>');
    let quoted = quoted_ranges(&chars)
        .into_iter()
        .find(|&(open, close)| open <= column && column <= close);

    let in_tag = match (last_open, last_close) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    };
    if in_tag {
        let (open, close) = quoted?;
        return trimmed_span(&chars, open + 1, close);
    }

    let in_markup = last_close.is_some() || chars[column..].contains(&'<');
    match quoted {
        Some((open, close)) if !in_markup => trimmed_span(&chars, open + 1, close),
        _ => {
            let start = last_close.map_or(0, |close| close + 1);
            let end = chars[column..]
                .iter()
                .position(|&c| c == '<')
                .map_or(chars.len(), |offset| column + offset);
            trimmed_span(&chars, start, end)
        }
    }
}

/// `(open, close)` indices of the quote pairs on a line. Backslash escapes
/// are honoured; an unclosed quote yields nothing.
fn quoted_ranges(chars: &[char]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut open: Option<(usize, char)> = None;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        match open {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some((start, quote)) if c == quote => {
                ranges.push((start, i));
                open = None;
            }
            Some(_) => {}
            None if matches!(c, '\'' | '"' | '`') => open = Some((i, c)),
            None => {}
        }
    }
    ranges
}

fn trimmed_span(chars: &[char], mut start: usize, mut end: usize) -> Option<TextSpan> {
    while start < end && chars[start].is_whitespace() {
        start += 1;
    }
    while end > start && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    if start == end {
        return None;
    }
    Some(TextSpan {
        value: chars[start..end].iter().collect(),
        start,
        end,
    })
}

/// Truncate text to at most `max_width` display columns, marking the cut with `...`.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
