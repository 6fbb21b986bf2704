use glossa::mcp::{GlossaMcpServer, types::AnalyseUsageParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{
    McpTestFixture, assert_pagination, extract_tool_result_json, fixture_with_usage,
};

fn params(root: String) -> AnalyseUsageParams {
    AnalyseUsageParams {
        project_root_path: root,
        extensions: None,
        default_locale: None,
        limit: None,
        offset: None,
    }
}

#[tokio::test]
async fn test_analyse_usage_statistics() {
    let fixture = fixture_with_usage().unwrap();
    let server = GlossaMcpServer::new();

    let result = server
        .analyse_usage(Parameters(params(fixture.root())))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["defaultLocale"], "en");
    assert_eq!(json_result["totalFilesScanned"], 1);
    assert_eq!(json_result["aborted"], false);
    // common.submit and onlyGerman exact, home partial
    assert_eq!(json_result["exactCount"], 2);
    assert_eq!(json_result["partialCount"], 1);
    assert_eq!(
        json_result["entriesPerLocale"],
        json!([
            { "locale": "en", "entries": 5 },
            { "locale": "de", "entries": 2 }
        ])
    );
    assert_eq!(
        json_result["found"],
        json!([
            {
                "path": "common.submit",
                "kind": "exact",
                "locale": "en",
                "translation": "Submit",
                "locations": [{ "filePath": "src/app.ts", "line": 1, "col": 14 }]
            },
            {
                "path": "home",
                "kind": "partial",
                "locale": "en",
                "translation": "unknown",
                "locations": [{ "filePath": "src/app.ts", "line": 2, "col": 14 }]
            },
            {
                "path": "onlyGerman",
                "kind": "exact",
                "locale": "de",
                "translation": "Nur hier",
                "locations": [{ "filePath": "src/app.ts", "line": 3, "col": 14 }]
            }
        ])
    );
    assert_eq!(json_result["missingCount"], 2);
    assert_eq!(
        json_result["missing"],
        json!([
            { "path": "common.cancel", "translation": "Cancel" },
            { "path": "legacy", "translation": "Old text" }
        ])
    );
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_analyse_usage_pagination() {
    let fixture = fixture_with_usage().unwrap();
    let server = GlossaMcpServer::new();

    let mut p = params(fixture.root());
    p.limit = Some(1);

    let result = server.analyse_usage(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["missing"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["missing"][0]["path"], "common.cancel");
    assert_eq!(json_result["found"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["found"][0]["path"], "common.submit");
    assert_pagination(&json_result, 0, 1, true);

    let mut p = params(fixture.root());
    p.limit = Some(1);
    p.offset = Some(1);

    let result = server.analyse_usage(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["missing"][0]["path"], "legacy");
    assert_eq!(json_result["found"][0]["path"], "home");
    // one more found path remains
    assert_pagination(&json_result, 1, 1, true);

    let mut p = params(fixture.root());
    p.limit = Some(1);
    p.offset = Some(2);

    let result = server.analyse_usage(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["missing"].as_array().unwrap().is_empty());
    assert_eq!(json_result["found"][0]["path"], "onlyGerman");
    assert_pagination(&json_result, 2, 1, false);
}

#[tokio::test]
async fn test_analyse_usage_extension_filter() {
    let fixture = fixture_with_usage().unwrap();
    let server = GlossaMcpServer::new();

    let mut p = params(fixture.root());
    p.extensions = Some(vec![".html".to_string()]);

    let result = server.analyse_usage(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalFilesScanned"], 0);
    assert_eq!(json_result["missingCount"], 5);
}

#[tokio::test]
async fn test_analyse_usage_default_locale_override() {
    let fixture = fixture_with_usage().unwrap();
    let server = GlossaMcpServer::new();

    let mut p = params(fixture.root());
    p.default_locale = Some("de".to_string());

    let result = server.analyse_usage(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["defaultLocale"], "de");
    assert_eq!(json_result["missingCount"], 0);
}

#[tokio::test]
async fn test_analyse_usage_empty_default_catalog_fails() {
    let fixture = McpTestFixture::with_catalogs(vec![("en", json!({}))]).unwrap();
    let server = GlossaMcpServer::new();

    let err = server
        .analyse_usage(Parameters(params(fixture.root())))
        .await
        .unwrap_err();
    assert!(err.message.contains("No translation catalog"));
}
