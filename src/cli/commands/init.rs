use std::{env, fs};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, Config, config_json, discover_translation_files};

/// Write `.glossarc.json` in the current directory, pre-filled with any
/// `i18n/<locale>.json` catalogs found below it.
pub fn init() -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        let summary = InitSummary {
            created: false,
            discovered: Vec::new(),
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        };
        return Ok(finish(CommandSummary::Init(summary), Vec::new(), true));
    }

    let translation_files = discover_translation_files(&cwd);
    let discovered = translation_files
        .iter()
        .map(|f| format!("{} ({})", f.locale, f.path))
        .collect();

    let config = Config {
        translation_files,
        ..Default::default()
    };
    fs::write(&config_path, format!("{}\n", config_json(&config)?))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let summary = InitSummary {
        created: true,
        discovered,
        error: None,
    };
    Ok(finish(CommandSummary::Init(summary), Vec::new(), true))
}
