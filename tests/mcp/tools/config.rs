use glossa::mcp::{
    GlossaMcpServer,
    types::{GetCatalogsParams, GetConfigParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = GlossaMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["analysisExtensions"], json!(["ts", "html"]));
    assert_eq!(json_result["config"]["jsonIndentation"], 2);
    assert_eq!(json_result["config"]["flatKeys"], false);
    assert!(json_result["config"]["defaultLocale"].is_null());
}

#[tokio::test]
async fn test_get_config_from_glossarc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "translationFiles": [{ "locale": "fr", "path": "lang/fr.json" }],
            "defaultLocale": "fr",
            "sortKeys": true
        }))
        .unwrap();

    let server = GlossaMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["defaultLocale"], "fr");
    assert_eq!(json_result["config"]["sortKeys"], true);
    assert_eq!(
        json_result["config"]["translationFiles"],
        json!([{ "locale": "fr", "path": "lang/fr.json" }])
    );
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "jsonIndentation": 40 }))
        .unwrap();

    let server = GlossaMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_config(params).await.unwrap_err();
    assert!(err.message.contains("jsonIndentation"));
}

// ============================================================================
// get_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_get_catalogs_in_declaration_order() {
    let fixture = McpTestFixture::with_catalogs(vec![
        ("en", json!({ "a": { "b": "B", "c": "C" } })),
        ("de", json!({ "a.b": "B" })),
    ])
    .unwrap();
    let server = GlossaMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["defaultLocale"], "en");
    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    assert_eq!(catalogs[0]["locale"], "en");
    assert_eq!(catalogs[0]["entryCount"], 2);
    assert_eq!(catalogs[0]["partialPathCount"], 1);
    assert_eq!(catalogs[0]["keyStyle"], "nested");
    assert_eq!(catalogs[0]["isDefault"], true);

    assert_eq!(catalogs[1]["locale"], "de");
    assert_eq!(catalogs[1]["keyStyle"], "flat");
    assert_eq!(catalogs[1]["isDefault"], false);
    assert!(json_result["skipped"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_catalogs_reports_broken_file() {
    let fixture = McpTestFixture::with_catalogs(vec![
        ("en", json!({ "a": "A" })),
        ("de", json!({ "a": "A" })),
    ])
    .unwrap();
    std::fs::write(fixture.root_path().join("i18n/de.json"), "[1, 2]").unwrap();

    let server = GlossaMcpServer::new();
    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogs"].as_array().unwrap().len(), 1);
    let skipped = json_result["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["locale"], "de");
}

#[tokio::test]
async fn test_get_catalogs_without_config_fails() {
    let fixture = McpTestFixture::new().unwrap();
    let server = GlossaMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_catalogs(params).await.is_err());
}
