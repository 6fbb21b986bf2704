use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::{Config, TranslationFile},
    core::{
        CatalogLocation,
        duplicates::{DuplicateLeaves, DuplicateTranslation},
    },
};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCatalogsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyseUsageParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Source file extensions to scan (default: from config)
    pub extensions: Option<Vec<String>>,
    /// Default locale override
    pub default_locale: Option<String>,
    /// Maximum number of found and of missing paths to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of found and of missing paths to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTranslationParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Dotted translation path, e.g. `tour.start`
    pub path: String,
    /// Translation text
    pub value: String,
    /// Target locale (default: the default locale)
    pub locale: Option<String>,
    /// Replace existing data at the path (default false)
    pub overwrite: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateTranslationParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Dotted translation path
    pub path: String,
    /// Catalog to search (default: the default locale)
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToTranslationParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Source file, relative to the project root or absolute
    pub file_path: String,
    /// 1-based line of the text to convert
    pub line: usize,
    /// 1-based column inside the text to convert
    pub column: usize,
    /// Translation path to store the text under
    pub key: String,
    /// Target locale (default: the default locale)
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindDuplicatesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Catalog to inspect (default: the default locale)
    pub locale: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub root_dir: String,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationFileDto {
    pub locale: String,
    pub path: String,
}

impl From<TranslationFile> for TranslationFileDto {
    fn from(f: TranslationFile) -> Self {
        Self {
            locale: f.locale,
            path: f.path,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translation_files: Vec<TranslationFileDto>,
    pub default_locale: Option<String>,
    pub flat_keys: bool,
    pub analysis_extensions: Vec<String>,
    pub json_indentation: usize,
    pub sort_keys: bool,
    pub warn_about_key_style: bool,
    pub ignores: Vec<String>,
    pub source_root: String,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            translation_files: c.translation_files.into_iter().map(Into::into).collect(),
            default_locale: c.default_locale,
            flat_keys: c.flat_keys,
            analysis_extensions: c.analysis_extensions,
            json_indentation: c.json_indentation,
            sort_keys: c.sort_keys,
            warn_about_key_style: c.warn_about_key_style,
            ignores: c.ignores,
            source_root: c.source_root,
        }
    }
}

// ============================================================
// Catalog Types (get_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub default_locale: String,
    pub catalogs: Vec<CatalogInfo>,
    /// Declared catalogs that failed to load
    pub skipped: Vec<SkippedCatalog>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub locale: String,
    pub file_path: String,
    pub entry_count: usize,
    pub partial_path_count: usize,
    /// undefined, flat, nested or mixed
    pub key_style: String,
    pub is_default: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCatalog {
    pub locale: String,
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Usage Types (analyse_usage)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsageResult {
    pub default_locale: String,
    pub total_files_scanned: usize,
    pub skipped_files: usize,
    pub aborted: bool,
    pub entries_per_locale: Vec<LocaleEntries>,
    pub exact_count: usize,
    pub partial_count: usize,
    /// Paths referenced in source, sorted, with every occurrence
    pub found: Vec<FoundItem>,
    pub missing_count: usize,
    /// Default-locale paths never referenced in source
    pub missing: Vec<MissingItem>,
    /// Applies to `found` and `missing` alike; `hasMore` is set if either has more
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoundItem {
    pub path: String,
    /// exact or partial
    pub kind: String,
    /// Locale whose catalog resolved the path
    pub locale: String,
    /// Catalog text, or "unknown" for partial matches
    pub translation: String,
    pub locations: Vec<SourceLocation>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    /// Relative to the project root
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntries {
    pub locale: String,
    pub entries: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub path: String,
    pub translation: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Write Types (upsert_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResult {
    pub success: bool,
    pub path: String,
    pub locale: String,
    pub file_path: String,
    /// added or updated; absent when the write was refused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================
// Locate Types (locate_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateResult {
    pub found: bool,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub locale: String,
    pub file_path: String,
    pub line: usize,
    pub partial: bool,
}

impl From<CatalogLocation> for LocationDto {
    fn from(l: CatalogLocation) -> Self {
        Self {
            locale: l.locale,
            file_path: l.file_path.to_string_lossy().to_string(),
            line: l.line,
            partial: l.partial,
        }
    }
}

// ============================================================
// Convert Types (convert_to_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResult {
    pub success: bool,
    pub key: String,
    pub locale: String,
    /// Catalog file the text was written to
    pub file_path: String,
    /// Text moved into the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Expression now in the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================
// Duplicate Types (find_duplicates)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicatesResult {
    pub locale: String,
    pub leaves: Vec<LeafGroup>,
    pub translations: Vec<TranslationGroup>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeafGroup {
    pub leaf: String,
    pub paths: Vec<String>,
}

impl From<DuplicateLeaves> for LeafGroup {
    fn from(d: DuplicateLeaves) -> Self {
        Self {
            leaf: d.leaf,
            paths: d.translations.into_iter().map(|t| t.path).collect(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationGroup {
    pub translation: String,
    pub occurrences: usize,
    pub paths: Vec<String>,
}

impl From<DuplicateTranslation> for TranslationGroup {
    fn from(d: DuplicateTranslation) -> Self {
        Self {
            translation: d.translation,
            occurrences: d.occurrences,
            paths: d.paths,
        }
    }
}
