//! Corpus usage analysis.
//!
//! Scans source files for quoted identifiers, resolves each against every
//! catalog and reports which catalog paths are used, partially used
//! (namespace prefixes composed at runtime) or never referenced.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use super::{
    catalog::{CatalogCollection, CatalogIndex},
    extract::{IdentifierCandidate, extract},
    file_scanner::scan_files,
};
use crate::error::{CatalogError, Result};

/// Translation text recorded for partial matches.
pub const UNKNOWN_TRANSLATION: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The path names a leaf.
    Exact,
    /// The path names a branch; the leaf is chosen at runtime.
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageLocation {
    pub file: PathBuf,
    pub line: usize,
    pub col: usize,
}

/// One distinct identifier found in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    /// Locale whose catalog resolved the path first.
    pub locale: String,
    pub path: String,
    /// The catalog value, or [`UNKNOWN_TRANSLATION`] for partial matches.
    pub translation: String,
    pub match_kind: MatchKind,
    /// Every occurrence, in file then discovery order.
    pub locations: Vec<UsageLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleEntryCount {
    pub locale: String,
    pub entries: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    /// Resolved identifiers keyed by path.
    pub found: BTreeMap<String, UsageEntry>,
    /// Default-locale paths not covered by anything in `found`, sorted.
    pub missing: Vec<String>,
    pub total_files_scanned: usize,
    /// Entry count of every catalog, in declaration order.
    pub total_entries_per_locale: Vec<LocaleEntryCount>,
    /// Files that could not be read.
    pub skipped_files: usize,
    /// True if the run was cancelled; `found` and `missing` then only
    /// reflect the files processed before that.
    pub aborted: bool,
}

impl UsageReport {
    pub fn exact_count(&self) -> usize {
        self.count(MatchKind::Exact)
    }

    pub fn partial_count(&self) -> usize {
        self.count(MatchKind::Partial)
    }

    fn count(&self, kind: MatchKind) -> usize {
        self.found.values().filter(|e| e.match_kind == kind).count()
    }

    /// Record one occurrence of `path`, resolving it against `catalogs` in order.
    ///
    /// The first catalog that resolves the path creates the entry; later
    /// occurrences only add locations. Returns false if nothing resolves.
    fn record<'a>(
        &mut self,
        catalogs: impl IntoIterator<Item = &'a CatalogIndex>,
        path: &str,
        location: UsageLocation,
    ) -> bool {
        if let Some(entry) = self.found.get_mut(path) {
            entry.locations.push(location);
            return true;
        }

        for catalog in catalogs {
            let resolved = match catalog.get_translation(path) {
                Some(text) => Some((MatchKind::Exact, text.to_string())),
                None if catalog.is_partial_match(path) => {
                    Some((MatchKind::Partial, UNKNOWN_TRANSLATION.to_string()))
                }
                None => None,
            };

            if let Some((match_kind, translation)) = resolved {
                self.found.insert(
                    path.to_string(),
                    UsageEntry {
                        locale: catalog.identifier.clone(),
                        path: path.to_string(),
                        translation,
                        match_kind,
                        locations: vec![location],
                    },
                );
                return true;
            }
        }

        false
    }
}

/// Shared flag for stopping a long scan early.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone)]
pub struct AnalyseOptions {
    /// Corpus root.
    pub source_root: PathBuf,
    /// Extension allow-list, without dots.
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub cancel: Option<CancelFlag>,
    pub verbose: bool,
}

impl AnalyseOptions {
    pub fn new(source_root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            source_root: source_root.into(),
            extensions,
            ignores: Vec::new(),
            cancel: None,
            verbose: false,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

enum FileScan {
    Extracted(PathBuf, Vec<IdentifierCandidate>),
    Unreadable,
    Cancelled,
}

/// Analyse identifier usage in the corpus against every catalog in `collection`.
///
/// Fails with `NoCatalog` if the default catalog is empty. Zero results is
/// not an error.
pub fn analyse(collection: &CatalogCollection, options: &AnalyseOptions) -> Result<UsageReport> {
    let default = collection.default();
    if default.is_empty() {
        return Err(CatalogError::NoCatalog);
    }

    let scan = scan_files(
        &options.source_root,
        &options.extensions,
        &options.ignores,
        options.verbose,
    );

    let mut report = UsageReport {
        total_files_scanned: scan.files.len(),
        total_entries_per_locale: collection
            .iter()
            .map(|index| LocaleEntryCount {
                locale: index.identifier.clone(),
                entries: index.len(),
            })
            .collect(),
        skipped_files: scan.skipped_count,
        ..Default::default()
    };

    let scanned: Vec<FileScan> = scan
        .files
        .par_iter()
        .map(|file| scan_file(file, options))
        .collect();

    for result in scanned {
        match result {
            FileScan::Extracted(file, candidates) => {
                for candidate in candidates {
                    let location = UsageLocation {
                        file: file.clone(),
                        line: candidate.line,
                        col: candidate.col,
                    };
                    report.record(collection.iter(), &candidate.path, location);
                }
            }
            FileScan::Unreadable => report.skipped_files += 1,
            FileScan::Cancelled => {
                report.aborted = true;
                break;
            }
        }
    }

    report.missing = find_missing(default, &report.found);
    Ok(report)
}

fn scan_file(file: &Path, options: &AnalyseOptions) -> FileScan {
    if options.is_cancelled() {
        return FileScan::Cancelled;
    }

    // Invalid UTF-8 is replaced rather than rejected so one stray byte does
    // not hide the identifiers of a whole file.
    match fs::read(file) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            FileScan::Extracted(file.to_path_buf(), extract(&content).collect())
        }
        Err(e) => {
            if options.verbose {
                eprintln!(
                    "{} Cannot read {}: {}",
                    "warning:".bold().yellow(),
                    file.display(),
                    e
                );
            }
            FileScan::Unreadable
        }
    }
}

/// Default-locale paths with no entry in `found` for the path or any of
/// its prefixes.
pub fn find_missing(default: &CatalogIndex, found: &BTreeMap<String, UsageEntry>) -> Vec<String> {
    default
        .sorted_keys()
        .into_iter()
        .filter(|path| !is_covered(path, found))
        .cloned()
        .collect()
}

fn is_covered(path: &str, found: &BTreeMap<String, UsageEntry>) -> bool {
    let mut current = path;
    loop {
        if found.contains_key(current) {
            return true;
        }
        match current.rfind('.') {
            Some(dot) => current = &current[..dot],
            None => return false,
        }
    }
}
