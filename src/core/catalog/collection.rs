use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use super::CatalogIndex;
use crate::{
    config::Config,
    error::{CatalogError, Result},
};

/// A catalog that failed to load during a collection build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogScanWarning {
    pub locale: String,
    pub file_path: PathBuf,
    pub error: String,
}

/// Outcome of `CatalogCollection::build`.
#[derive(Debug, Default)]
pub struct CatalogBuildReport {
    pub warnings: Vec<CatalogScanWarning>,
}

/// Every configured locale's catalog, kept in declaration order.
#[derive(Debug, Default)]
pub struct CatalogCollection {
    sets: Vec<CatalogIndex>,
    default_locale: Option<String>,
    empty: CatalogIndex,
}

impl CatalogCollection {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Rebuild every catalog declared in `config`, resolving paths against `root_dir`.
    ///
    /// A catalog that fails to read or parse is left out and recorded as a
    /// warning. Fails only when nothing is declared at all.
    pub fn build(&mut self, root_dir: &Path, config: &Config) -> Result<CatalogBuildReport> {
        self.sets.clear();
        self.default_locale = config.default_locale.clone();

        if config.translation_files.is_empty() {
            return Err(CatalogError::ConfigurationMissing);
        }

        let loaded: Vec<Result<CatalogIndex>> = config
            .translation_files
            .par_iter()
            .map(|file| CatalogIndex::from_file(&file.locale, &root_dir.join(&file.path)))
            .collect();

        let mut report = CatalogBuildReport::default();
        for result in loaded {
            match result {
                Ok(index) => self.install(index),
                Err(CatalogError::CatalogParseFailure {
                    locale,
                    path,
                    reason,
                }) => report.warnings.push(CatalogScanWarning {
                    locale,
                    file_path: path,
                    error: reason,
                }),
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Add or replace the catalog for `index.identifier`.
    pub fn install(&mut self, index: CatalogIndex) {
        match self
            .sets
            .iter_mut()
            .find(|existing| existing.identifier == index.identifier)
        {
            Some(existing) => *existing = index,
            None => self.sets.push(index),
        }
    }

    /// The configured default catalog, else the first one built, else an empty index.
    pub fn default(&self) -> &CatalogIndex {
        self.default_locale
            .as_deref()
            .and_then(|locale| self.get(locale))
            .or_else(|| self.sets.first())
            .unwrap_or(&self.empty)
    }

    pub fn get(&self, locale: &str) -> Option<&CatalogIndex> {
        self.sets.iter().find(|index| index.identifier == locale)
    }

    /// Catalog for `locale`, or the default one when `locale` is `None`.
    pub fn get_or_default(&self, locale: Option<&str>) -> Option<&CatalogIndex> {
        match locale {
            Some(locale) => self.get(locale),
            None => Some(self.default()).filter(|index| !index.is_empty()),
        }
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|index| index.identifier.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogIndex> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
