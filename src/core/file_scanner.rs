use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::is_dependency_dir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Collect every file under `base_dir` whose extension is in `extensions`.
///
/// Dependency directories (`node_modules`, `.git`, ...) are never entered.
/// `ignore_patterns` may mix globs matched against the full path and literal
/// paths relative to `base_dir`.
pub fn scan_files(
    base_dir: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let walker = WalkDir::new(base_dir).into_iter().filter_entry(|e| {
        e.depth() == 0
            || !(e.file_type().is_dir() && is_dependency_dir(&e.file_name().to_string_lossy()))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && has_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
