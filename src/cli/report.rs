//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format; each command summary has its
//! own short listing. Kept apart from the core so glossa can be used as a
//! library.

use std::{
    env,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    AnalyseSummary, CommandResult, CommandSummary, ConvertSummary, DuplicatesSummary, InitSummary,
    LocateSummary, WriteSummary, helper::display_path,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{MatchKind, UsageEntry},
    issues::{Issue, Report, ReportLocation, Severity},
    utils::truncate_text,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Set to suppress the elapsed time line (used by the CLI tests).
pub const DISABLE_TIMING_ENV: &str = "GLOSSA_DISABLE_TIMING";

/// Width at which translations are cut in listings.
const MAX_TRANSLATION_WIDTH: usize = 60;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    let root = match &result.summary {
        CommandSummary::Analyse(summary) => Some(summary.root_dir.as_path()),
        _ => None,
    };
    report_to(&result.issues, root, writer);

    match &result.summary {
        CommandSummary::Analyse(summary) => print_analyse(summary, verbose, writer),
        CommandSummary::Write(summary) => print_write(summary, writer),
        CommandSummary::Locate(summary) => print_locate(summary, writer),
        CommandSummary::Convert(summary) => print_convert(summary, writer),
        CommandSummary::Duplicates(summary) => print_duplicates(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Print issues in cargo-style format, followed by a problem count.
///
/// Paths are shown relative to `root` when given.
pub fn report_to<W: Write>(issues: &[Issue], root: Option<&Path>, writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Catalog { line, .. } => Some(line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in issues {
        print_issue(issue, root, writer, max_line_width);
    }

    print_problem_count(issues, writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn shown_path(path: &Path, root: Option<&Path>) -> String {
    match root {
        Some(root) => display_path(path, root),
        None => path.display().to_string(),
    }
}

fn print_issue<W: Write>(issue: &Issue, root: Option<&Path>, writer: &mut W, width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Catalog { path, line } => {
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                shown_path(path, root),
                line
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), shown_path(path, root));
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
        );
    }

    let _ = writeln!(writer);
}

fn print_problem_count<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_analyse<W: Write>(summary: &AnalyseSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;

    print_matches(summary, MatchKind::Exact, verbose, writer);
    print_matches(summary, MatchKind::Partial, verbose, writer);

    if report.aborted {
        let _ = writeln!(
            writer,
            "{} analysis was cancelled, results are incomplete",
            "warning:".bold().yellow()
        );
    }

    let _ = writeln!(
        writer,
        "Scanned {}, found {} ({} exact, {} partial)",
        plural(report.total_files_scanned, "source file", "source files"),
        plural(report.found.len(), "identifier", "identifiers"),
        report.exact_count(),
        report.partial_count()
    );
    for count in &report.total_entries_per_locale {
        let _ = writeln!(
            writer,
            "  {}: {}",
            count.locale,
            plural(count.entries, "entry", "entries")
        );
    }
    if report.skipped_files > 0 {
        let _ = writeln!(
            writer,
            "{} {} could not be read",
            "warning:".bold().yellow(),
            plural(report.skipped_files, "file", "files")
        );
    }

    if report.missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Every {} path is used", summary.default_locale).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} in {} never used",
                plural(report.missing.len(), "path", "paths"),
                summary.default_locale
            )
            .red()
        );
    }

    if env::var_os(DISABLE_TIMING_ENV).is_none() {
        let _ = writeln!(
            writer,
            "{}",
            format!("Finished in {}ms", summary.elapsed_ms).dimmed()
        );
    }
}

/// List every found path of one kind with all of its source locations.
fn print_matches<W: Write>(
    summary: &AnalyseSummary,
    kind: MatchKind,
    verbose: bool,
    writer: &mut W,
) {
    let entries: Vec<&UsageEntry> = summary
        .report
        .found
        .values()
        .filter(|entry| entry.match_kind == kind)
        .collect();
    if entries.is_empty() {
        return;
    }

    let title = match kind {
        MatchKind::Exact => "Exact matches".green(),
        MatchKind::Partial => "Partial matches".yellow(),
    };
    let _ = writeln!(writer, "{} ({})", title.bold(), entries.len());

    for entry in entries {
        let locale = if entry.locale != summary.default_locale {
            format!(" [{}]", entry.locale).cyan().to_string()
        } else {
            String::new()
        };
        let translation = if verbose && kind == MatchKind::Exact {
            format!(
                " ({})",
                truncate_text(&entry.translation, MAX_TRANSLATION_WIDTH)
            )
            .dimmed()
            .to_string()
        } else {
            String::new()
        };
        let _ = writeln!(writer, "  {}{}{}", entry.path, locale, translation);

        for location in &entry.locations {
            let _ = writeln!(
                writer,
                "      {}",
                format!(
                    "{}:{}:{}",
                    display_path(&location.file, &summary.root_dir),
                    location.line,
                    location.col
                )
                .dimmed()
            );
        }
    }
    let _ = writeln!(writer);
}

fn print_write<W: Write>(summary: &WriteSummary, writer: &mut W) {
    match (&summary.action, &summary.error) {
        (Some(action), _) => {
            let _ = writeln!(
                writer,
                "{} {} {} in {} ({})",
                SUCCESS_MARK.green(),
                action.as_str().green().bold(),
                summary.path,
                summary.locale,
                summary.file_path.display()
            );
        }
        (None, Some(error)) => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
            if summary.conflict {
                let _ = writeln!(
                    writer,
                    "Use {} to replace the existing value.",
                    "glossa change".cyan()
                );
            }
        }
        (None, None) => {}
    }
}

fn print_locate<W: Write>(summary: &LocateSummary, writer: &mut W) {
    if let Some(location) = &summary.location {
        let _ = writeln!(
            writer,
            "{}:{}{}",
            location.file_path.display(),
            location.line,
            if location.partial {
                " (partial)".dimmed().to_string()
            } else {
                String::new()
            }
        );
    } else if let Some(error) = &summary.error {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
    }
}

fn print_convert<W: Write>(summary: &ConvertSummary, writer: &mut W) {
    match (&summary.conversion, &summary.error) {
        (Some(conversion), _) => {
            let _ = writeln!(
                writer,
                "{} {} {} in {} ({})",
                SUCCESS_MARK.green(),
                conversion.action.as_str().green().bold(),
                conversion.key,
                summary.locale,
                display_path(&summary.catalog_file, &summary.root_dir)
            );
            let _ = writeln!(
                writer,
                "  {}:{} \"{}\" -> {}",
                display_path(&summary.position.file, &summary.root_dir),
                summary.position.line,
                truncate_text(&conversion.text, MAX_TRANSLATION_WIDTH),
                conversion.replacement.cyan()
            );
        }
        (None, Some(error)) => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
        }
        (None, None) => {}
    }
}

fn print_duplicates<W: Write>(summary: &DuplicatesSummary, writer: &mut W) {
    if summary.leaves.is_empty() && summary.translations.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No duplicates in {}", summary.locale).green()
        );
        return;
    }

    if !summary.leaves.is_empty() {
        let _ = writeln!(writer, "{}", "Duplicate leaves:".bold());
        for group in &summary.leaves {
            let _ = writeln!(writer, "  {}", group.leaf.cyan());
            for item in &group.translations {
                let _ = writeln!(
                    writer,
                    "    {} {}",
                    item.path,
                    format!("({})", truncate_text(&item.translation, MAX_TRANSLATION_WIDTH))
                        .dimmed()
                );
            }
        }
    }

    if !summary.translations.is_empty() {
        let _ = writeln!(writer, "{}", "Duplicate translations:".bold());
        for group in &summary.translations {
            let _ = writeln!(
                writer,
                "  \"{}\" ({}x)",
                truncate_text(&group.translation, MAX_TRANSLATION_WIDTH),
                group.occurrences
            );
            for path in &group.paths {
                let _ = writeln!(writer, "    {}", path);
            }
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if let Some(error) = &summary.error {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
        return;
    }

    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
        if summary.discovered.is_empty() {
            let _ = writeln!(
                writer,
                "No catalogs found; add them to {} under \"translationFiles\".",
                CONFIG_FILE_NAME
            );
        }
        for catalog in &summary.discovered {
            let _ = writeln!(writer, "  {}", catalog);
        }
    }
}
