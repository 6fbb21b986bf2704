use std::{
    collections::{HashMap, HashSet},
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CatalogError, Result};

/// Key convention detected in a catalog.
///
/// - `Flat`: hierarchy is encoded as literal dots inside a single key
///   (`{"tour.start": "..."}`).
/// - `Nested`: hierarchy uses real nested objects (`{"tour": {"start": "..."}}`).
/// - `Mixed`: both conventions appear in the same catalog.
///
/// Classification is monotonic: once `Mixed`, always `Mixed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStyle {
    #[default]
    Undefined,
    Flat,
    Nested,
    Mixed,
}

impl KeyStyle {
    /// Combine the current classification with a new observation.
    pub fn observe(self, seen: KeyStyle) -> KeyStyle {
        match (self, seen) {
            (current, KeyStyle::Undefined) => current,
            (KeyStyle::Undefined, seen) => seen,
            (KeyStyle::Mixed, _) | (_, KeyStyle::Mixed) => KeyStyle::Mixed,
            (current, seen) if current == seen => current,
            _ => KeyStyle::Mixed,
        }
    }
}

impl fmt::Display for KeyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyStyle::Undefined => write!(f, "undefined"),
            KeyStyle::Flat => write!(f, "flat"),
            KeyStyle::Nested => write!(f, "nested"),
            KeyStyle::Mixed => write!(f, "mixed"),
        }
    }
}

/// Flattened, indexed view of one locale's translation catalog.
///
/// Built once from a parsed JSON object. Edits to the backing file are not
/// reflected until the index is rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    /// Locale tag (e.g. "en", "de").
    pub identifier: String,
    /// Backing JSON file. Not interpreted by the index itself.
    pub source: PathBuf,
    /// Dotted path -> translation text, one per leaf.
    entries: HashMap<String, String>,
    /// Every strict ancestor prefix of every entry path.
    partial_paths: HashSet<String>,
    key_style: KeyStyle,
}

impl CatalogIndex {
    pub fn new(identifier: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            source: source.into(),
            ..Default::default()
        }
    }

    /// Read, parse and index a catalog file.
    pub fn from_file(identifier: &str, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::parse_failure(identifier, path, e.to_string()))?;
        let json: Value = serde_json::from_str(&content)
            .map_err(|e| CatalogError::parse_failure(identifier, path, e.to_string()))?;

        let mut index = Self::new(identifier, path);
        index.build(path, &json)?;
        Ok(index)
    }

    /// Populate the index from a parsed JSON object.
    ///
    /// Replaces any previous contents. Fails if `json` is not an object.
    pub fn build(&mut self, source: impl Into<PathBuf>, json: &Value) -> Result<()> {
        self.source = source.into();

        let Value::Object(root) = json else {
            return Err(CatalogError::parse_failure(
                &self.identifier,
                &self.source,
                "top-level value is not a JSON object",
            ));
        };

        self.entries.clear();
        self.partial_paths.clear();
        self.key_style = KeyStyle::Undefined;

        flatten_object(root, None, &mut self.key_style, &mut self.entries);
        self.build_partial_paths();
        Ok(())
    }

    fn build_partial_paths(&mut self) {
        for path in self.entries.keys() {
            for (dot, _) in path.match_indices('.') {
                self.partial_paths.insert(path[..dot].to_string());
            }
        }
    }

    /// Exact lookup of a leaf path.
    pub fn get_translation(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Whether `path` names a branch (a strict prefix of some entry path).
    pub fn is_partial_match(&self, path: &str) -> bool {
        self.partial_paths.contains(path)
    }

    /// Whether `path` is either an entry or a partial path.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path) || self.is_partial_match(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn partial_len(&self) -> usize {
        self.partial_paths.len()
    }

    pub fn key_style(&self) -> KeyStyle {
        self.key_style
    }

    /// All entry paths, sorted.
    pub fn sorted_keys(&self) -> Vec<&String> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    /// File name of the backing catalog, for messages.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

fn join_path(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}.{}", prefix, key),
        None => key.to_string(),
    }
}

fn flatten_object(
    map: &Map<String, Value>,
    prefix: Option<&str>,
    style: &mut KeyStyle,
    entries: &mut HashMap<String, String>,
) {
    for (key, value) in map {
        if key.contains('.') {
            *style = style.observe(KeyStyle::Flat);
        }
        flatten_value(value, join_path(prefix, key), style, entries);
    }
}

fn flatten_value(
    value: &Value,
    path: String,
    style: &mut KeyStyle,
    entries: &mut HashMap<String, String>,
) {
    match value {
        Value::String(s) => {
            entries.insert(path, s.clone());
        }
        // An empty branch still declares the key.
        Value::Object(map) if map.is_empty() => {
            entries.insert(path, String::new());
        }
        Value::Object(map) => {
            *style = style.observe(KeyStyle::Nested);
            flatten_object(map, Some(&path), style, entries);
        }
        Value::Array(items) if items.is_empty() => {
            entries.insert(path, String::new());
        }
        Value::Array(items) => {
            *style = style.observe(KeyStyle::Nested);
            for (index, item) in items.iter().enumerate() {
                flatten_value(item, format!("{}.{}", path, index), style, entries);
            }
        }
        Value::Null => {
            entries.insert(path, String::new());
        }
        Value::Bool(_) | Value::Number(_) => {
            entries.insert(path, value.to_string());
        }
    }
}
