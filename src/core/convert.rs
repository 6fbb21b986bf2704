//! Move literal text from a source file into a catalog.
//!
//! The text under a source position becomes a new catalog entry and is
//! replaced in the source by a `translate` pipe expression:
//!
//! ```text
//! <h1>Welcome to our app</h1>  ->  <h1>{{ 'home.title' | translate }}</h1>
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use super::{
    catalog::{CatalogIndex, locate::build_line_index},
    mutate::{CatalogMutator, KeyAction},
};
use crate::{
    error::{CatalogError, Result},
    utils::{is_translation_identifier, literal_at},
};

/// A 1-based line and column inside a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePosition {
    pub file: PathBuf,
    pub line: usize,
    pub col: usize,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub key: String,
    /// The literal text, now stored in the catalog.
    pub text: String,
    pub action: KeyAction,
    /// What replaced the text in the source.
    pub replacement: String,
}

/// Template expression referencing `key`.
pub fn translate_expression(key: &str) -> String {
    format!("{{{{ '{}' | translate }}}}", key)
}

/// Store the text at `position` under `key` in `catalog_file`, then replace it
/// in the source with [`translate_expression`].
///
/// `index` is the loaded catalog for `catalog_file`. Text that already is one
/// of its paths is refused with `AlreadyTranslated`, and an existing `key` is
/// never overwritten. The source is only rewritten once the catalog write
/// succeeded.
pub fn convert_literal(
    index: &CatalogIndex,
    mutator: &CatalogMutator,
    catalog_file: &Path,
    position: &SourcePosition,
    key: &str,
) -> Result<Conversion> {
    let nothing = || CatalogError::NothingToConvert {
        line: position.line,
        col: position.col,
    };

    let content =
        fs::read_to_string(&position.file).map_err(|e| CatalogError::io(&position.file, e))?;
    let line_index = build_line_index(&content);
    let line_start = position
        .line
        .checked_sub(1)
        .and_then(|line| line_index.get(line))
        .copied()
        .ok_or_else(nothing)?;
    let line_end = content[line_start..]
        .find('\n')
        .map_or(content.len(), |offset| line_start + offset);
    let line = content[line_start..line_end].trim_end_matches('\r');

    let span = literal_at(line, position.col.saturating_sub(1)).ok_or_else(nothing)?;
    if index.contains(&span.value) {
        return Err(CatalogError::AlreadyTranslated(span.value));
    }
    if !is_translation_identifier(key) {
        return Err(CatalogError::InvalidIdentifier(key.to_string()));
    }

    let action = mutator.upsert(catalog_file, key, &span.value, false)?;

    let replacement = translate_expression(key);
    let start = line_start + byte_offset(line, span.start);
    let end = line_start + byte_offset(line, span.end);
    let rewritten = format!("{}{}{}", &content[..start], replacement, &content[end..]);
    fs::write(&position.file, rewritten).map_err(|e| CatalogError::io(&position.file, e))?;

    Ok(Conversion {
        key: key.to_string(),
        text: span.value,
        action,
        replacement,
    })
}

fn byte_offset(text: &str, column: usize) -> usize {
    text.char_indices()
        .nth(column)
        .map_or(text.len(), |(offset, _)| offset)
}
