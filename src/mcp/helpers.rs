use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::cli::{args::CommonArgs, commands::context::CommandContext};

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 200;

/// Load config and catalogs for a project the same way the CLI does.
pub fn load_context(
    project_root_path: &str,
    default_locale: Option<String>,
) -> Result<CommandContext, McpError> {
    let args = CommonArgs {
        path: PathBuf::from(project_root_path),
        default_locale,
        verbose: false,
    };
    CommandContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

/// Serialize a tool result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Resolve `limit`/`offset` parameters, clamping the limit to `MAX_LIMIT`.
pub fn page_bounds(limit: Option<u32>, offset: Option<u32>) -> (usize, usize) {
    let limit = limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    (limit, offset)
}
