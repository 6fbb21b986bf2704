use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with catalogs under `i18n/` and a
/// `.glossarc.json` declaring them.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("i18n"))?;
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with catalogs, declared in the given order
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(vec![
    ///     ("en", json!({"key": "value"})),
    ///     ("de", json!({"key": "Wert"})),
    /// ])?;
    /// ```
    pub fn with_catalogs(locales: Vec<(&str, Value)>) -> Result<Self> {
        let fixture = Self::new()?;
        let files: Vec<Value> = locales
            .iter()
            .map(|(locale, _)| json!({ "locale": locale, "path": format!("i18n/{}.json", locale) }))
            .collect();
        fixture.write_config(&json!({ "translationFiles": files }))?;
        for (locale, content) in locales {
            fixture.write_catalog(locale, &content)?;
        }
        Ok(fixture)
    }

    /// Write a catalog to i18n/<locale>.json
    pub fn write_catalog(&self, locale: &str, content: &Value) -> Result<()> {
        let path = self.catalog_path(locale);
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for locale: {}", locale))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        Ok(())
    }

    /// Read a catalog from i18n/<locale>.json
    pub fn read_catalog(&self, locale: &str) -> Result<Value> {
        let path = self.catalog_path(locale);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }

    fn catalog_path(&self, locale: &str) -> PathBuf {
        self.project_root
            .join("i18n")
            .join(format!("{}.json", locale))
    }

    /// Write a source file relative to the project root
    pub fn write_source(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .glossarc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".glossarc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Two nested catalogs plus a source file using part of them
pub fn fixture_with_usage() -> Result<McpTestFixture> {
    let fixture = McpTestFixture::with_catalogs(vec![
        (
            "en",
            json!({
                "common": {
                    "submit": "Submit",
                    "cancel": "Cancel"
                },
                "home": {
                    "title": "Welcome",
                    "subtitle": "Glad you are here"
                },
                "legacy": "Old text"
            }),
        ),
        (
            "de",
            json!({
                "common": {
                    "submit": "Senden"
                },
                "onlyGerman": "Nur hier"
            }),
        ),
    ])?;
    fixture.write_source(
        "src/app.ts",
        "const a = t('common.submit');\nconst b = t(`home.${page}`);\nconst c = t('onlyGerman');\n",
    )?;
    Ok(fixture)
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
