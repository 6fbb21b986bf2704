use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{CatalogCollection, CatalogIndex},
    issues::{CatalogParseIssue, Issue, KeyStyleIssue},
};

/// Configuration and catalogs shared by the catalog commands.
#[derive(Debug)]
pub struct CommandContext {
    pub config: Config,
    /// Directory holding the config file; catalog and source paths resolve from here.
    pub root_dir: PathBuf,
    pub catalogs: CatalogCollection,
    /// Catalog load problems, reported alongside the command's own findings.
    pub issues: Vec<Issue>,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let start_dir = args.path.canonicalize().unwrap_or_else(|_| args.path.clone());
        let config_result = load_config(&start_dir)?;

        if args.verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(locale) = &args.default_locale {
            config.default_locale = Some(locale.clone());
        }

        let root_dir = config_result.root_dir;
        let mut catalogs = CatalogCollection::new();
        let build = catalogs.build(&root_dir, &config)?;

        let mut issues = Vec::new();
        for warning in build.warnings {
            if args.verbose {
                eprintln!(
                    "{} Skipping catalog '{}' ({}): {}",
                    "warning:".bold().yellow(),
                    warning.locale,
                    warning.file_path.display(),
                    warning.error
                );
            }
            issues.push(Issue::CatalogParse(CatalogParseIssue {
                locale: warning.locale,
                file_path: warning.file_path,
                error: warning.error,
            }));
        }

        if config.warn_about_key_style {
            let default = catalogs.default();
            if let Some(issue) = KeyStyleIssue::check(
                &default.identifier,
                &default.source,
                default.key_style(),
                config.flat_keys,
            ) {
                issues.push(Issue::KeyStyle(issue));
            }
        }

        Ok(Self {
            config,
            root_dir,
            catalogs,
            issues,
            verbose: args.verbose,
        })
    }

    /// The catalog for `locale`, or the default catalog.
    pub fn catalog(&self, locale: Option<&str>) -> Result<&CatalogIndex> {
        match self.catalogs.get_or_default(locale) {
            Some(index) => Ok(index),
            None => match locale {
                Some(locale) => bail!("No catalog loaded for locale '{}'", locale),
                None => bail!("No translation catalog could be loaded"),
            },
        }
    }

    /// Backing file of `locale` (or the default locale) as declared in the config.
    ///
    /// Works for catalogs that failed to load, so a broken file can be reported
    /// on rather than silently replaced.
    pub fn catalog_file(&self, locale: Option<&str>) -> Result<(String, PathBuf)> {
        let locale = match locale {
            Some(locale) => locale.to_string(),
            None => {
                let default = self.catalogs.default();
                if default.is_empty() && self.catalogs.is_empty() {
                    match self
                        .config
                        .default_locale
                        .clone()
                        .or_else(|| self.config.translation_files.first().map(|f| f.locale.clone()))
                    {
                        Some(locale) => locale,
                        None => bail!("No translation files configured"),
                    }
                } else {
                    default.identifier.clone()
                }
            }
        };

        match self.config.translation_file(&locale) {
            Some(file) => Ok((locale, self.root_dir.join(&file.path))),
            None => bail!("Locale '{}' is not declared in 'translationFiles'", locale),
        }
    }
}
