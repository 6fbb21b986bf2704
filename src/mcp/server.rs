use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    cli::commands::helper::display_path,
    config::{load_config, normalize_extensions},
    core::{
        AnalyseOptions, CatalogMutator, MatchKind, SourcePosition, analyse, convert_literal,
        duplicates::{find_duplicate_leaves, find_duplicate_translations},
    },
    error::CatalogError,
    issues::Issue,
};

use super::helpers::{json_result, load_context, page_bounds};
use super::types::{
    AnalyseUsageParams, CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, ConvertResult,
    ConvertToTranslationParams, DuplicatesResult, FindDuplicatesParams, FoundItem, GetCatalogsParams, GetConfigParams, LocaleEntries,
    LocateResult, LocateTranslationParams, MissingItem, Pagination, SkippedCatalog,
    SourceLocation, UpsertResult, UpsertTranslationParams, UsageResult,
};

#[derive(Clone)]
pub struct GlossaMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for GlossaMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl GlossaMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current glossa configuration
    #[tool(description = "Get the current glossa configuration (.glossarc.json or defaults).")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            root_dir: result.root_dir.to_string_lossy().to_string(),
            config: ConfigValues::from(result.config),
        })
    }

    /// List loaded catalogs
    #[tool(
        description = "List the translation catalogs with entry counts and key style. Catalogs that failed to load are listed under 'skipped'."
    )]
    pub async fn get_catalogs(
        &self,
        params: Parameters<GetCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path, None)?;
        let default_locale = ctx.catalogs.default().identifier.clone();

        let catalogs = ctx
            .catalogs
            .iter()
            .map(|index| CatalogInfo {
                locale: index.identifier.clone(),
                file_path: index.source.to_string_lossy().to_string(),
                entry_count: index.len(),
                partial_path_count: index.partial_len(),
                key_style: index.key_style().to_string(),
                is_default: index.identifier == default_locale,
            })
            .collect();

        let skipped = ctx
            .issues
            .iter()
            .filter_map(|issue| match issue {
                Issue::CatalogParse(parse) => Some(SkippedCatalog {
                    locale: parse.locale.clone(),
                    file_path: parse.file_path.to_string_lossy().to_string(),
                    error: parse.error.clone(),
                }),
                _ => None,
            })
            .collect();

        json_result(&CatalogsResult {
            default_locale,
            catalogs,
            skipped,
        })
    }

    /// Analyse identifier usage across the project sources
    #[tool(
        description = "Scan project sources for quoted translation paths. Lists the exact and partial matches with their source locations and the default-locale paths that are never used (paginated)."
    )]
    pub async fn analyse_usage(
        &self,
        params: Parameters<AnalyseUsageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (limit, offset) = page_bounds(params.limit, params.offset);
        let ctx = load_context(&params.project_root_path, params.default_locale)?;

        let extensions = match &params.extensions {
            Some(exts) => normalize_extensions(exts),
            None => ctx.config.normalized_extensions(),
        };
        let mut options =
            AnalyseOptions::new(ctx.root_dir.join(&ctx.config.source_root), extensions);
        options.ignores = ctx.config.ignores.clone();

        let report = analyse(&ctx.catalogs, &options)
            .map_err(|e| McpError::internal_error(format!("Analysis failed: {}", e), None))?;

        let found: Vec<FoundItem> = report
            .found
            .values()
            .skip(offset)
            .take(limit)
            .map(|entry| FoundItem {
                path: entry.path.clone(),
                kind: match entry.match_kind {
                    MatchKind::Exact => "exact",
                    MatchKind::Partial => "partial",
                }
                .to_string(),
                locale: entry.locale.clone(),
                translation: entry.translation.clone(),
                locations: entry
                    .locations
                    .iter()
                    .map(|location| SourceLocation {
                        file_path: display_path(&location.file, &ctx.root_dir),
                        line: location.line,
                        col: location.col,
                    })
                    .collect(),
            })
            .collect();

        let default = ctx.catalogs.default();
        let missing_count = report.missing.len();
        let missing: Vec<MissingItem> = report
            .missing
            .iter()
            .skip(offset)
            .take(limit)
            .map(|path| MissingItem {
                path: path.clone(),
                translation: default.get_translation(path).unwrap_or_default().to_string(),
            })
            .collect();
        let has_more = offset + missing.len() < missing_count
            || offset + found.len() < report.found.len();

        json_result(&UsageResult {
            default_locale: default.identifier.clone(),
            total_files_scanned: report.total_files_scanned,
            skipped_files: report.skipped_files,
            aborted: report.aborted,
            entries_per_locale: report
                .total_entries_per_locale
                .iter()
                .map(|c| LocaleEntries {
                    locale: c.locale.clone(),
                    entries: c.entries,
                })
                .collect(),
            exact_count: report.exact_count(),
            partial_count: report.partial_count(),
            found,
            missing_count,
            missing,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Add or change a translation
    #[tool(
        description = "Write a translation into a catalog. Without overwrite, refuses to replace a path that already holds data."
    )]
    pub async fn upsert_translation(
        &self,
        params: Parameters<UpsertTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path, None)?;
        let (locale, file_path) = ctx
            .catalog_file(params.locale.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let path = params.path.trim().to_string();
        let overwrite = params.overwrite.unwrap_or(false);
        let mutator = CatalogMutator::from_config(&ctx.config);

        let (action, error) = match mutator.upsert(&file_path, &path, &params.value, overwrite) {
            Ok(action) => (Some(action.as_str().to_string()), None),
            Err(e) if e.is_refusal() => (None, Some(e.to_string())),
            Err(e) => {
                return Err(McpError::internal_error(
                    format!("Failed to write {}: {}", file_path.display(), e),
                    None,
                ));
            }
        };

        json_result(&UpsertResult {
            success: action.is_some(),
            path,
            locale,
            file_path: file_path.to_string_lossy().to_string(),
            action,
            error,
        })
    }

    /// Find where a path is declared
    #[tool(description = "Find the catalog file and line declaring a translation path.")]
    pub async fn locate_translation(
        &self,
        params: Parameters<LocateTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path, None)?;
        let catalog = ctx
            .catalog(params.locale.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let path = params.path.trim().to_string();
        let result = match catalog.locate(&path) {
            Ok(location) => LocateResult {
                found: true,
                path,
                location: Some(location.into()),
                error: None,
            },
            Err(e @ CatalogError::PathNotFound { .. }) => LocateResult {
                found: false,
                path,
                location: None,
                error: Some(e.to_string()),
            },
            Err(e) => {
                return Err(McpError::internal_error(
                    format!("Locate failed: {}", e),
                    None,
                ));
            }
        };

        json_result(&result)
    }

    /// Move literal source text into a catalog
    #[tool(
        description = "Store the literal text at a source position as a new translation and replace it in the source with {{ 'key' | translate }}. Refuses text that already is a translation path and never overwrites an existing key."
    )]
    pub async fn convert_to_translation(
        &self,
        params: Parameters<ConvertToTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path, None)?;
        let catalog = ctx
            .catalog(params.locale.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let (locale, file_path) = ctx
            .catalog_file(params.locale.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let position = SourcePosition {
            file: ctx.root_dir.join(&params.file_path),
            line: params.line,
            col: params.column,
        };
        let key = params.key.trim().to_string();
        let mutator = CatalogMutator::from_config(&ctx.config);

        let (conversion, error) =
            match convert_literal(catalog, &mutator, &file_path, &position, &key) {
                Ok(conversion) => (Some(conversion), None),
                Err(e) if e.is_refusal() => (None, Some(e.to_string())),
                Err(e) => {
                    return Err(McpError::internal_error(
                        format!("Conversion failed: {}", e),
                        None,
                    ));
                }
            };

        json_result(&ConvertResult {
            success: conversion.is_some(),
            key,
            locale,
            file_path: file_path.to_string_lossy().to_string(),
            text: conversion.as_ref().map(|c| c.text.clone()),
            replacement: conversion.map(|c| c.replacement),
            error,
        })
    }

    /// List duplicate leaves and translations
    #[tool(
        description = "List paths sharing the same last segment and paths sharing the same translation text in one catalog."
    )]
    pub async fn find_duplicates(
        &self,
        params: Parameters<FindDuplicatesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path, None)?;
        let catalog = ctx
            .catalog(params.locale.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        json_result(&DuplicatesResult {
            locale: catalog.identifier.clone(),
            leaves: find_duplicate_leaves(catalog)
                .into_iter()
                .map(Into::into)
                .collect(),
            translations: find_duplicate_translations(catalog)
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }
}

#[tool_handler]
impl ServerHandler for GlossaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Glossa MCP helps AI agents keep JSON translation catalogs in sync with source code.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_catalogs - List catalogs, entry counts and key style\n\
                 3. analyse_usage - Found paths with locations and never-used paths (paginated)\n\
                 4. upsert_translation - Add a translation, or change one with overwrite\n\
                 5. locate_translation - Catalog file and line of a path\n\
                 6. find_duplicates - Duplicate leaves and duplicate translations\n\
                 7. convert_to_translation - Move literal text into a catalog\n\n\
                 Paths are dotted identifiers such as 'tour.start'. A path that only names a\n\
                 namespace (e.g. 'tour') counts as a partial use of everything below it."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = GlossaMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
