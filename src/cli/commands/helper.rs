use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary};
use crate::{
    core::SourcePosition,
    issues::{Issue, Severity},
    utils::identifier_at,
};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    let summary_failed = match &summary {
        CommandSummary::Write(s) => s.error.is_some(),
        CommandSummary::Locate(s) => s.error.is_some(),
        CommandSummary::Convert(s) => s.error.is_some(),
        CommandSummary::Init(s) => s.error.is_some(),
        CommandSummary::Analyse(_) | CommandSummary::Duplicates(_) => false,
    };
    if summary_failed {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
    }
}

/// Turn a `path` argument into a translation path.
///
/// `file:line:col` (1-based) selects the identifier under that position in
/// the file; anything else is taken literally.
pub fn resolve_identifier(arg: &str, base_dir: &Path) -> Result<String> {
    let Some((file, line, col)) = parse_position(arg) else {
        return Ok(arg.trim().to_string());
    };

    let file_path = base_dir.join(file);
    let content = fs::read_to_string(&file_path)
        .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
    let Some(text) = content.lines().nth(line.saturating_sub(1)) else {
        bail!("{} has no line {}", file, line);
    };

    let selection = identifier_at(text, col.saturating_sub(1));
    if selection.value.is_empty() {
        bail!("No translation path at {}", arg);
    }
    Ok(selection.value)
}

/// Parse a `file:line:col` argument, resolving the file against `base_dir`.
pub fn source_position(arg: &str, base_dir: &Path) -> Result<SourcePosition> {
    match parse_position(arg) {
        Some((file, line, col)) => Ok(SourcePosition {
            file: base_dir.join(file),
            line,
            col,
        }),
        None => bail!("Expected a file:line:col position, got '{}'", arg),
    }
}

fn parse_position(arg: &str) -> Option<(&str, usize, usize)> {
    let mut parts = arg.rsplitn(3, ':');
    let col = parts.next()?.parse().ok()?;
    let line = parts.next()?.parse().ok()?;
    let file = parts.next().filter(|f| !f.is_empty())?;
    Some((file, line, col))
}

/// Path relative to `root` for display, falling back to the full path.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map(PathBuf::from)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .replace('\\', "/")
}
