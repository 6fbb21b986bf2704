//! Catalog file edits.
//!
//! `CatalogMutator` inserts or replaces a single translation and rewrites the
//! whole file. The tree is edited in memory and written only when the edit
//! succeeds, so a rejected edit leaves the file untouched.

use std::{fs, path::Path};

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::{
    config::Config,
    error::{CatalogError, Result},
    utils::is_translation_identifier,
};

/// Action taken on a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogMutator {
    /// Store the whole dotted path as one top-level key.
    pub flat: bool,
    pub indentation: usize,
    pub sort_keys: bool,
}

impl Default for CatalogMutator {
    fn default() -> Self {
        Self {
            flat: false,
            indentation: 2,
            sort_keys: false,
        }
    }
}

impl CatalogMutator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            flat: config.flat_keys,
            indentation: config.json_indentation,
            sort_keys: config.sort_keys,
        }
    }

    /// Set `path` to `value` in the catalog file at `source`.
    ///
    /// A missing file is created. Fails with `WriteConflict` when the slot
    /// already holds a non-empty value or branch and `overwrite` is false.
    pub fn upsert(
        &self,
        source: &Path,
        path: &str,
        value: &str,
        overwrite: bool,
    ) -> Result<KeyAction> {
        if !is_translation_identifier(path) {
            return Err(CatalogError::InvalidIdentifier(path.to_string()));
        }

        let mut root = read_catalog(source)?;
        let action = self.upsert_value(&mut root, path, value, overwrite)?;
        if self.sort_keys {
            sort_object(&mut root);
        }

        let content = self.to_json_string(&Value::Object(root))?;
        if let Some(parent) = source.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }
        fs::write(source, content).map_err(|e| CatalogError::io(source, e))?;

        Ok(action)
    }

    /// Apply the edit to an in-memory tree.
    ///
    /// `root` is only modified when the edit succeeds.
    pub fn upsert_value(
        &self,
        root: &mut Map<String, Value>,
        path: &str,
        value: &str,
        overwrite: bool,
    ) -> Result<KeyAction> {
        if !is_translation_identifier(path) {
            return Err(CatalogError::InvalidIdentifier(path.to_string()));
        }

        if self.flat {
            return set_slot(root, path, path, value, overwrite);
        }

        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(CatalogError::InvalidIdentifier(path.to_string()));
        }

        let mut edited = root.clone();
        let action = set_nested(&mut edited, &segments, path, value, overwrite)?;
        *root = edited;
        Ok(action)
    }

    /// Pretty-print with the configured indentation and a trailing newline.
    pub fn to_json_string(&self, value: &Value) -> Result<String> {
        let indent = " ".repeat(self.indentation);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn read_catalog(source: &Path) -> Result<Map<String, Value>> {
    if !source.exists() {
        return Ok(Map::new());
    }

    let content = fs::read_to_string(source).map_err(|e| CatalogError::io(source, e))?;
    let locale = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CatalogError::parse_failure(
            locale,
            source,
            "top-level value is not a JSON object",
        )),
        Err(e) => Err(CatalogError::parse_failure(locale, source, e.to_string())),
    }
}

fn set_nested(
    node: &mut Map<String, Value>,
    segments: &[&str],
    full_path: &str,
    value: &str,
    overwrite: bool,
) -> Result<KeyAction> {
    let [head, rest @ ..] = segments else {
        return Err(CatalogError::InvalidIdentifier(full_path.to_string()));
    };

    if rest.is_empty() {
        return set_slot(node, head, full_path, value, overwrite);
    }

    let child = node
        .entry(head.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if !child.is_object() {
        // A leaf sits where a branch is needed.
        if holds_data(child) && !overwrite {
            return Err(CatalogError::WriteConflict {
                path: full_path.to_string(),
            });
        }
        *child = Value::Object(Map::new());
    }

    match child {
        Value::Object(map) => set_nested(map, rest, full_path, value, overwrite),
        _ => Err(CatalogError::InvalidIdentifier(full_path.to_string())),
    }
}

fn set_slot(
    node: &mut Map<String, Value>,
    key: &str,
    full_path: &str,
    value: &str,
    overwrite: bool,
) -> Result<KeyAction> {
    let action = match node.get(key) {
        None => KeyAction::Added,
        Some(existing) if holds_data(existing) && !overwrite => {
            return Err(CatalogError::WriteConflict {
                path: full_path.to_string(),
            });
        }
        Some(_) => KeyAction::Updated,
    };

    node.insert(key.to_string(), Value::String(value.to_string()));
    Ok(action)
}

/// Whether a slot holds something an edit would destroy.
fn holds_data(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Sort object keys recursively.
pub fn sort_object(map: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (key, mut value) in entries {
        if let Value::Object(inner) = &mut value {
            sort_object(inner);
        }
        map.insert(key, value);
    }
}
