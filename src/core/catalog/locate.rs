//! Map a dotted path back to its position in the catalog file.

use std::{fs, path::PathBuf};

use serde::Serialize;

use super::CatalogIndex;
use crate::error::{CatalogError, Result};

/// Position of a key inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogLocation {
    pub locale: String,
    pub file_path: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Whether the path names a branch rather than a leaf.
    pub partial: bool,
}

impl CatalogIndex {
    /// Find where `path` is declared in the backing file.
    ///
    /// Returns `PathNotFound` if the path is neither an entry nor a partial path.
    pub fn locate(&self, path: &str) -> Result<CatalogLocation> {
        if !self.contains(path) {
            return Err(CatalogError::PathNotFound {
                path: path.to_string(),
                catalog: self.file_name(),
            });
        }

        let content = fs::read_to_string(&self.source)
            .map_err(|e| CatalogError::io(&self.source, e))?;
        let line = find_key_line(&content, path);

        Ok(CatalogLocation {
            locale: self.identifier.clone(),
            file_path: self.source.clone(),
            line,
            partial: self.get_translation(path).is_none(),
        })
    }
}

/// Build an index of line start byte offsets.
pub(crate) fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number for a byte offset.
pub(crate) fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Line of the key named by `path`, or of the first key below it when the
/// path is a namespace spelled out in flat keys. Falls back to line 1.
pub fn find_key_line(content: &str, path: &str) -> usize {
    let keys = key_offsets(content);
    let prefix = format!("{}.", path);

    keys.iter()
        .find(|(key, _)| key == path)
        .or_else(|| keys.iter().find(|(key, _)| key.starts_with(&prefix)))
        .map(|(_, offset)| offset_to_line(&build_line_index(content), *offset))
        .unwrap_or(1)
}

/// Every key of the document with its full dotted path and the byte offset
/// of its opening quote, in document order. Array elements are keyed by
/// index. Stops quietly at the first syntax error.
fn key_offsets(content: &str) -> Vec<(String, usize)> {
    let mut walker = KeyWalker {
        content,
        pos: 0,
        keys: Vec::new(),
    };
    walker.value("");
    walker.keys
}

struct KeyWalker<'a> {
    content: &'a str,
    pos: usize,
    keys: Vec<(String, usize)>,
}

impl KeyWalker<'_> {
    fn peek(&self) -> Option<u8> {
        self.content.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn value(&mut self, path: &str) -> Option<()> {
        self.skip_whitespace();
        match self.peek()? {
            b'{' => self.object(path),
            b'[' => self.array(path),
            b'"' => self.string().map(drop),
            _ => self.scalar(),
        }
    }

    fn object(&mut self, path: &str) -> Option<()> {
        self.pos += 1;
        loop {
            self.skip_whitespace();
            match self.peek()? {
                b'}' => {
                    self.pos += 1;
                    return Some(());
                }
                b',' => self.pos += 1,
                b'"' => {
                    let start = self.pos;
                    let key = join_path(path, &self.string()?);
                    self.keys.push((key.clone(), start));
                    self.skip_whitespace();
                    if self.peek()? != b':' {
                        return None;
                    }
                    self.pos += 1;
                    self.value(&key)?;
                }
                _ => return None,
            }
        }
    }

    fn array(&mut self, path: &str) -> Option<()> {
        self.pos += 1;
        let mut index = 0;
        loop {
            self.skip_whitespace();
            match self.peek()? {
                b']' => {
                    self.pos += 1;
                    return Some(());
                }
                b',' => self.pos += 1,
                _ => {
                    let key = join_path(path, &index.to_string());
                    self.keys.push((key.clone(), self.pos));
                    self.value(&key)?;
                    index += 1;
                }
            }
        }
    }

    /// Decoded string literal starting at the current quote.
    fn string(&mut self) -> Option<String> {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.peek()? {
                b'\\' => self.pos += 2,
                b'"' => break,
                _ => self.pos += 1,
            }
        }
        self.pos += 1;
        let literal = self.content.get(start..self.pos)?;
        serde_json::from_str(literal).ok()
    }

    fn scalar(&mut self) -> Option<()> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| !b.is_ascii_whitespace() && !matches!(b, b',' | b'}' | b']'))
        {
            self.pos += 1;
        }
        (self.pos > start).then_some(())
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}
