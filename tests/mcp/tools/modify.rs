use glossa::mcp::{
    GlossaMcpServer,
    types::{
        ConvertToTranslationParams, FindDuplicatesParams, LocateTranslationParams,
        UpsertTranslationParams,
    },
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

fn upsert(root: String, path: &str, value: &str, overwrite: Option<bool>) -> UpsertTranslationParams {
    UpsertTranslationParams {
        project_root_path: root,
        path: path.to_string(),
        value: value.to_string(),
        locale: None,
        overwrite,
    }
}

// ============================================================================
// upsert_translation tests
// ============================================================================

#[tokio::test]
async fn test_upsert_adds_nested_key() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("en", json!({ "common": { "ok": "OK" } }))]).unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .upsert_translation(Parameters(upsert(fixture.root(), "common.cancel", "Cancel", None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["action"], "added");
    assert_eq!(json_result["locale"], "en");
    assert_eq!(
        fixture.read_catalog("en").unwrap(),
        json!({ "common": { "ok": "OK", "cancel": "Cancel" } })
    );
}

#[tokio::test]
async fn test_upsert_conflict_leaves_file_untouched() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("en", json!({ "a": "a" }))]).unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .upsert_translation(Parameters(upsert(fixture.root(), "a.b.c", "c", None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert!(json_result.get("action").is_none());
    assert!(json_result["error"].as_str().unwrap().contains("already exists"));
    assert_eq!(fixture.read_catalog("en").unwrap(), json!({ "a": "a" }));
}

#[tokio::test]
async fn test_upsert_overwrite_replaces_leaf() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("en", json!({ "a": "a" }))]).unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .upsert_translation(Parameters(upsert(fixture.root(), "a.b.c", "c", Some(true))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(
        fixture.read_catalog("en").unwrap(),
        json!({ "a": { "b": { "c": "c" } } })
    );
}

#[tokio::test]
async fn test_upsert_other_locale() {
    let fixture = McpTestFixture::with_catalogs(vec![
        ("en", json!({ "a": "A" })),
        ("de", json!({})),
    ])
    .unwrap();
    let server = GlossaMcpServer::new();

    let mut params = upsert(fixture.root(), "a", "Ä", None);
    params.locale = Some("de".to_string());

    let result = server.upsert_translation(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locale"], "de");
    assert_eq!(fixture.read_catalog("de").unwrap(), json!({ "a": "Ä" }));
    assert_eq!(fixture.read_catalog("en").unwrap(), json!({ "a": "A" }));
}

#[tokio::test]
async fn test_upsert_invalid_identifier() {
    let fixture = McpTestFixture::with_catalogs(vec![("en", json!({ "a": "A" }))]).unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .upsert_translation(Parameters(upsert(fixture.root(), "a b", "x", None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert!(json_result["error"].as_str().unwrap().contains("not a valid"));
}

#[tokio::test]
async fn test_upsert_unknown_locale_is_rejected() {
    let fixture = McpTestFixture::with_catalogs(vec![("en", json!({ "a": "A" }))]).unwrap();
    let server = GlossaMcpServer::new();

    let mut params = upsert(fixture.root(), "a", "x", None);
    params.locale = Some("fr".to_string());

    assert!(server.upsert_translation(Parameters(params)).await.is_err());
}

// ============================================================================
// locate_translation tests
// ============================================================================

#[tokio::test]
async fn test_locate_translation() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "en",
        json!({ "tour": { "title": "Tour", "start": "Start" } }),
    )])
    .unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .locate_translation(Parameters(LocateTranslationParams {
            project_root_path: fixture.root(),
            path: "tour.start".to_string(),
            locale: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["location"]["line"], 4);
    assert_eq!(json_result["location"]["partial"], false);
    assert!(
        json_result["location"]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("en.json")
    );
}

#[tokio::test]
async fn test_locate_translation_not_found() {
    let fixture = McpTestFixture::with_catalogs(vec![("en", json!({ "a": "A" }))]).unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .locate_translation(Parameters(LocateTranslationParams {
            project_root_path: fixture.root(),
            path: "b".to_string(),
            locale: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], false);
    assert!(json_result["error"].as_str().unwrap().contains("Could not find 'b'"));
}

// ============================================================================
// find_duplicates tests
// ============================================================================

#[tokio::test]
async fn test_find_duplicates() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "en",
        json!({
            "home": { "title": "Home", "back": "Back" },
            "about": { "title": "About", "back": "Back" }
        }),
    )])
    .unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .find_duplicates(Parameters(FindDuplicatesParams {
            project_root_path: fixture.root(),
            locale: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locale"], "en");
    assert_eq!(
        json_result["leaves"],
        json!([
            { "leaf": "back", "paths": ["about.back", "home.back"] },
            { "leaf": "title", "paths": ["about.title", "home.title"] }
        ])
    );
    assert_eq!(
        json_result["translations"],
        json!([
            { "translation": "Back", "occurrences": 2, "paths": ["about.back", "home.back"] }
        ])
    );
}

// ============================================================================
// convert_to_translation tests
// ============================================================================

fn convert(root: String, line: usize, column: usize, key: &str) -> ConvertToTranslationParams {
    ConvertToTranslationParams {
        project_root_path: root,
        file_path: "src/app.html".to_string(),
        line,
        column,
        key: key.to_string(),
        locale: None,
    }
}

#[tokio::test]
async fn test_convert_moves_text_into_catalog() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("en", json!({ "nav": { "home": "Home" } }))]).unwrap();
    fixture
        .write_source("src/app.html", "<h1>Welcome back</h1>\n")
        .unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .convert_to_translation(Parameters(convert(fixture.root(), 1, 6, "home.title")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["text"], "Welcome back");
    assert_eq!(json_result["replacement"], "{{ 'home.title' | translate }}");
    assert_eq!(
        fixture.read_catalog("en").unwrap(),
        json!({ "nav": { "home": "Home" }, "home": { "title": "Welcome back" } })
    );
    let source = std::fs::read_to_string(fixture.root_path().join("src/app.html")).unwrap();
    assert_eq!(source, "<h1>{{ 'home.title' | translate }}</h1>\n");
}

#[tokio::test]
async fn test_convert_refuses_existing_path() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("en", json!({ "nav": { "home": "Home" } }))]).unwrap();
    fixture.write_source("src/app.html", "<a>nav</a>\n").unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .convert_to_translation(Parameters(convert(fixture.root(), 1, 4, "nav.link")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert!(json_result.get("text").is_none());
    assert!(json_result["error"].as_str().unwrap().contains("already is a translation path"));
    assert_eq!(
        fixture.read_catalog("en").unwrap(),
        json!({ "nav": { "home": "Home" } })
    );
}
