//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyse`: Cross-reference source identifiers with the catalogs
//! - `create`: Add a translation (refuses to replace existing data)
//! - `change`: Set a translation, replacing what is there
//! - `locate`: Print where a path is declared in a catalog
//! - `convert`: Move literal source text into a catalog
//! - `duplicates`: List duplicate leaves and duplicate translations
//! - `init`: Initialize glossa configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Analyse(cmd)) => cmd.common.verbose,
            Some(Command::Create(cmd)) | Some(Command::Change(cmd)) => cmd.common.verbose,
            Some(Command::Locate(cmd)) => cmd.common.verbose,
            Some(Command::Convert(cmd)) => cmd.common.verbose,
            Some(Command::Duplicates(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory (the config file is searched from here upwards)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnalyseCommand {
    /// Source file extensions to scan, comma separated (overrides config file)
    #[arg(long, value_name = "EXTENSIONS")]
    pub ext: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct WriteCommand {
    /// Dotted translation path, or a `file:line:col` position inside a quoted path
    #[arg(value_name = "PATH")]
    pub identifier: String,

    /// Translation text
    pub value: String,

    /// Target locale (default: the default locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocateCommand {
    /// Dotted translation path, or a `file:line:col` position inside a quoted path
    #[arg(value_name = "PATH")]
    pub identifier: String,

    /// Catalog to search (default: the default locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// `file:line:col` position inside the text to convert
    pub position: String,

    /// Translation path to store the text under
    pub key: String,

    /// Target locale (default: the default locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DuplicatesCommand {
    /// Catalog to inspect (default: the default locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report which catalog paths are used, partially used or never referenced
    #[command(alias = "analyze")]
    Analyse(AnalyseCommand),
    /// Add a translation; fails if the path already holds data
    Create(WriteCommand),
    /// Set a translation, replacing any existing value
    Change(WriteCommand),
    /// Print the catalog file and line declaring a path
    Locate(LocateCommand),
    /// Move literal text into a catalog and reference it with the translate pipe
    Convert(ConvertCommand),
    /// List duplicate path leaves and duplicate translations
    Duplicates(DuplicatesCommand),
    /// Initialize a new .glossarc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
