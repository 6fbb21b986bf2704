use std::{fs, time::Instant};

use anyhow::Result;

use super::{
    super::args::AnalyseCommand, AnalyseSummary, CommandResult, CommandSummary,
    context::CommandContext, helper::finish,
};
use crate::{
    config::parse_extension_list,
    core::{AnalyseOptions, CatalogIndex, analyse as analyse_usage, catalog::find_key_line},
    issues::{Issue, MissingUsageIssue},
};

pub fn analyse(cmd: AnalyseCommand) -> Result<CommandResult> {
    let started = Instant::now();
    let ctx = CommandContext::new(&cmd.common)?;

    let source_root = match &cmd.source_root {
        Some(dir) => dir.clone(),
        None => ctx.root_dir.join(&ctx.config.source_root),
    };
    let extensions = match &cmd.ext {
        Some(list) => parse_extension_list(list),
        None => ctx.config.normalized_extensions(),
    };

    let options = AnalyseOptions {
        source_root,
        extensions,
        ignores: ctx.config.ignores.clone(),
        cancel: None,
        verbose: ctx.verbose,
    };
    let report = analyse_usage(&ctx.catalogs, &options)?;

    let default = ctx.catalogs.default();
    let mut issues = ctx.issues.clone();
    issues.extend(missing_issues(default, &report.missing));

    let summary = AnalyseSummary {
        report,
        default_locale: default.identifier.clone(),
        root_dir: ctx.root_dir.clone(),
        elapsed_ms: started.elapsed().as_millis(),
    };

    Ok(finish(CommandSummary::Analyse(summary), issues, true))
}

fn missing_issues(default: &CatalogIndex, missing: &[String]) -> Vec<Issue> {
    let content = fs::read_to_string(&default.source).unwrap_or_default();

    missing
        .iter()
        .map(|key| {
            Issue::Missing(MissingUsageIssue {
                locale: default.identifier.clone(),
                file_path: default.source.clone(),
                line: find_key_line(&content, key),
                key: key.clone(),
                value: default.get_translation(key).unwrap_or_default().to_string(),
            })
        })
        .collect()
}
