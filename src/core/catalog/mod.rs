//! Translation catalogs.
//!
//! - `index`: flattened per-locale view of one JSON catalog
//! - `collection`: all configured locales, rebuilt as a whole
//! - `locate`: map a path back to its line in the catalog file

pub mod collection;
pub mod index;
pub mod locate;

pub use collection::{CatalogBuildReport, CatalogCollection, CatalogScanWarning};
pub use index::{CatalogIndex, KeyStyle};
pub use locate::{CatalogLocation, find_key_line};
