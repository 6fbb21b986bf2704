//! Issue types for catalog analysis results.
//!
//! Each issue is self-contained with all information needed by the reporters
//! (CLI output, MCP responses).

use std::path::PathBuf;

use enum_dispatch::enum_dispatch;

use crate::core::KeyStyle;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Missing,
    CatalogParse,
    KeyStyle,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Missing => write!(f, "missing"),
            Rule::CatalogParse => write!(f, "catalog-parse"),
            Rule::KeyStyle => write!(f, "key-style"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Catalog path declared in the default locale but never referenced in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingUsageIssue {
    pub locale: String,
    pub file_path: PathBuf,
    pub line: usize,
    pub key: String,
    pub value: String,
}

impl MissingUsageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Missing
    }
}

/// Catalog file that could not be loaded. The locale is left out of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogParseIssue {
    pub locale: String,
    pub file_path: PathBuf,
    pub error: String,
}

impl CatalogParseIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::CatalogParse
    }
}

/// Catalog key convention disagrees with the `flatKeys` setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStyleIssue {
    pub locale: String,
    pub file_path: PathBuf,
    pub detected: KeyStyle,
    pub flat_keys: bool,
}

impl KeyStyleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::KeyStyle
    }

    /// Compare a catalog's detected style with the configured one.
    ///
    /// Returns `None` when they agree or nothing was detected.
    pub fn check(
        locale: &str,
        file_path: impl Into<PathBuf>,
        detected: KeyStyle,
        flat_keys: bool,
    ) -> Option<Self> {
        let mismatch = match detected {
            KeyStyle::Undefined => false,
            KeyStyle::Mixed => true,
            KeyStyle::Flat => !flat_keys,
            KeyStyle::Nested => flat_keys,
        };
        mismatch.then(|| Self {
            locale: locale.to_string(),
            file_path: file_path.into(),
            detected,
            flat_keys,
        })
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A finding produced by a command.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Missing(MissingUsageIssue),
    CatalogParse(CatalogParseIssue),
    KeyStyle(KeyStyleIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A line inside a catalog file.
    Catalog { path: &'a PathBuf, line: usize },
    /// File-level only.
    File { path: &'a PathBuf },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for MissingUsageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Catalog {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} (\"{}\")", self.locale, self.value))
    }
}

impl Report for CatalogParseIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("locale '{}' was skipped", self.locale))
    }
}

impl Report for KeyStyleIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("{} catalog uses {} keys", self.locale, self.detected)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        let setting = match self.detected {
            KeyStyle::Mixed => return Some("Use one key convention per catalog".to_string()),
            KeyStyle::Flat => "true",
            _ => "false",
        };
        Some(format!("Set \"flatKeys\": {} in .glossarc.json", setting))
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &PathBuf {
        match self.location() {
            ReportLocation::Catalog { path, .. } => path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Catalog { line, .. } => line,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
