use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

/// Directories never scanned for source files or catalogs.
pub const DEPENDENCY_DIRS: &[&str] = &["node_modules", ".git", "target", "dist", "vendor"];

const MAX_JSON_INDENTATION: usize = 8;

/// A locale and the catalog file that backs it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationFile {
    pub locale: String,
    /// Path relative to the project root (absolute paths are used as-is).
    #[serde(alias = "uri")]
    pub path: String,
}

impl TranslationFile {
    pub fn new(locale: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub translation_files: Vec<TranslationFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(default)]
    pub flat_keys: bool,
    #[serde(default = "default_analysis_extensions")]
    pub analysis_extensions: Vec<String>,
    #[serde(default = "default_json_indentation")]
    pub json_indentation: usize,
    #[serde(default)]
    pub sort_keys: bool,
    #[serde(default = "default_warn_about_key_style")]
    pub warn_about_key_style: bool,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_analysis_extensions() -> Vec<String> {
    ["ts", "html"].map(String::from).to_vec()
}

fn default_json_indentation() -> usize {
    2
}

fn default_warn_about_key_style() -> bool {
    true
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation_files: Vec::new(),
            default_locale: None,
            flat_keys: false,
            analysis_extensions: default_analysis_extensions(),
            json_indentation: default_json_indentation(),
            sort_keys: false,
            warn_about_key_style: default_warn_about_key_style(),
            ignores: default_ignores(),
            source_root: default_source_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, empty or
    /// duplicate locales, and out-of-range indentation.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        let mut seen = HashSet::new();
        for file in &self.translation_files {
            if file.locale.trim().is_empty() {
                bail!(
                    "Empty locale in 'translationFiles' for path \"{}\"",
                    file.path
                );
            }
            if !seen.insert(file.locale.as_str()) {
                bail!("Duplicate locale in 'translationFiles': \"{}\"", file.locale);
            }
        }

        if self.json_indentation > MAX_JSON_INDENTATION {
            bail!(
                "'jsonIndentation' must be at most {}, got {}",
                MAX_JSON_INDENTATION,
                self.json_indentation
            );
        }

        Ok(())
    }

    /// Extensions with surrounding whitespace and leading dots removed.
    pub fn normalized_extensions(&self) -> Vec<String> {
        normalize_extensions(&self.analysis_extensions)
    }

    /// Locate the catalog file declared for `locale`.
    pub fn translation_file(&self, locale: &str) -> Option<&TranslationFile> {
        self.translation_files.iter().find(|f| f.locale == locale)
    }
}

/// Parse a comma separated extension list such as `"ts, html"`.
pub fn parse_extension_list(list: &str) -> Vec<String> {
    normalize_extensions(&list.split(',').map(String::from).collect::<Vec<_>>())
}

pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

pub fn default_config_json() -> Result<String> {
    config_json(&Config::default())
}

pub fn config_json(config: &Config) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to generate config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory containing the config file, or the start directory.
    pub root_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root_dir: start_dir.to_path_buf(),
        }),
    }
}

pub fn is_dependency_dir(name: &str) -> bool {
    DEPENDENCY_DIRS.contains(&name)
}

/// Find catalogs following the `**/i18n/<locale>.json` convention.
///
/// Results are sorted by locale. Dependency directories are skipped.
pub fn discover_translation_files(root_dir: &Path) -> Vec<TranslationFile> {
    let mut files: Vec<TranslationFile> = WalkDir::new(root_dir)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir() && is_dependency_dir(&e.file_name().to_string_lossy()))
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .strip_prefix(root_dir)
                .map(|rel| rel.components().any(|c| c.as_os_str() == "i18n"))
                .unwrap_or(false)
        })
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("json"))
        .filter_map(|e| {
            let locale = e.path().file_stem()?.to_str()?.to_string();
            let relative = e.path().strip_prefix(root_dir).ok()?;
            Some(TranslationFile::new(
                locale,
                relative.to_string_lossy().replace('\\', "/"),
            ))
        })
        .collect();

    files.sort_by(|a, b| a.locale.cmp(&b.locale).then_with(|| a.path.cmp(&b.path)));
    files.dedup_by(|a, b| a.locale == b.locale);
    files
}
