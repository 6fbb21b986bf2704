//! Error taxonomy for catalog operations.
//!
//! Every variant is locally recoverable: callers report it and carry on with
//! whatever partial state they have. Application layers (CLI, MCP) wrap these
//! into `anyhow::Error` with `?`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No locale files are declared in the configuration.
    #[error(
        "No translation files configured.\n\
         Hint: Add entries to 'translationFiles' in .glossarc.json or run `glossa init`."
    )]
    ConfigurationMissing,

    /// A declared locale file could not be read or is not a JSON object.
    #[error("Failed to load catalog '{locale}' from {}: {reason}", path.display())]
    CatalogParseFailure {
        locale: String,
        path: PathBuf,
        reason: String,
    },

    /// The default catalog is empty or failed to load.
    #[error("No translation catalog available to analyse against")]
    NoCatalog,

    /// The given path is not a translation identifier (`[A-Za-z0-9._-]+`).
    #[error("'{0}' is not a valid translation identifier")]
    InvalidIdentifier(String),

    /// The target slot already holds data and overwrite was not requested.
    #[error("The path '{path}' already exists. Use overwrite to replace it.")]
    WriteConflict { path: String },

    /// The path is neither an entry nor a partial path of the catalog.
    #[error("Could not find '{path}' in {catalog}")]
    PathNotFound { path: String, catalog: String },

    /// Text picked for conversion is already an entry or partial path.
    #[error("'{0}' already is a translation path")]
    AlreadyTranslated(String),

    /// No literal text at the source position picked for conversion.
    #[error("No text to convert at line {line}, column {col}")]
    NothingToConvert { line: usize, col: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse_failure(
        locale: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CatalogParseFailure {
            locale: locale.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for conditions the caller can resolve by retrying differently
    /// (e.g. with overwrite enabled).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::WriteConflict { .. })
    }

    /// True if an edit was refused because of its input, leaving every file
    /// untouched.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::WriteConflict { .. }
                | Self::InvalidIdentifier(_)
                | Self::AlreadyTranslated(_)
                | Self::NothingToConvert { .. }
        )
    }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
