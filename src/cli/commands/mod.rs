pub mod analyse;
pub mod context;
pub mod convert;
pub mod duplicates;
pub mod helper;
pub mod init;
pub mod locate;
pub mod write;

use std::path::PathBuf;

use crate::{
    core::{
        CatalogLocation, Conversion, KeyAction, SourcePosition, UsageReport,
        duplicates::{DuplicateLeaves, DuplicateTranslation},
    },
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Analyse(AnalyseSummary),
    Write(WriteSummary),
    Locate(LocateSummary),
    Convert(ConvertSummary),
    Duplicates(DuplicatesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AnalyseSummary {
    pub report: UsageReport,
    pub default_locale: String,
    /// Paths are shown relative to this directory.
    pub root_dir: PathBuf,
    pub elapsed_ms: u128,
}

#[derive(Debug)]
pub struct WriteSummary {
    pub path: String,
    pub locale: String,
    pub file_path: PathBuf,
    pub overwrite: bool,
    /// `None` when the write was refused.
    pub action: Option<KeyAction>,
    pub error: Option<String>,
    /// The refusal was a conflict with existing data.
    pub conflict: bool,
}

#[derive(Debug)]
pub struct LocateSummary {
    pub path: String,
    pub location: Option<CatalogLocation>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ConvertSummary {
    pub key: String,
    pub locale: String,
    pub catalog_file: PathBuf,
    pub position: SourcePosition,
    /// Paths are shown relative to this directory.
    pub root_dir: PathBuf,
    /// `None` when the conversion was refused.
    pub conversion: Option<Conversion>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct DuplicatesSummary {
    pub locale: String,
    pub leaves: Vec<DuplicateLeaves>,
    pub translations: Vec<DuplicateTranslation>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub discovered: Vec<String>,
    pub error: Option<String>,
}

/// Result of running glossa commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Findings that block a clean exit.
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found, sorted.
    pub issues: Vec<Issue>,
}
