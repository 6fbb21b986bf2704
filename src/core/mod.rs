//! Core catalog and usage analysis engine.
//!
//! ## Module Structure
//!
//! - `catalog`: per-locale catalog indexes and the locale collection
//! - `extract`: quoted identifier extraction from source text
//! - `file_scanner`: corpus discovery
//! - `usage`: resolve extracted identifiers against catalogs
//! - `mutate`: write translations back to catalog files
//! - `convert`: move literal source text into a catalog
//! - `duplicates`: duplicate leaves and translations within a catalog

pub mod catalog;
pub mod convert;
pub mod duplicates;
pub mod extract;
pub mod file_scanner;
pub mod mutate;
pub mod usage;

pub use catalog::{
    CatalogBuildReport, CatalogCollection, CatalogIndex, CatalogLocation, CatalogScanWarning,
    KeyStyle,
};
pub use convert::{Conversion, SourcePosition, convert_literal};
pub use mutate::{CatalogMutator, KeyAction};
pub use usage::{
    AnalyseOptions, CancelFlag, MatchKind, UsageEntry, UsageLocation, UsageReport, analyse,
};
