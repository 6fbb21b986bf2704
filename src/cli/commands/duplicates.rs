use anyhow::Result;

use super::{
    super::args::DuplicatesCommand, CommandResult, CommandSummary, DuplicatesSummary,
    context::CommandContext, helper::finish,
};
use crate::core::duplicates::{find_duplicate_leaves, find_duplicate_translations};

pub fn duplicates(cmd: DuplicatesCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let catalog = ctx.catalog(cmd.locale.as_deref())?;

    let summary = DuplicatesSummary {
        locale: catalog.identifier.clone(),
        leaves: find_duplicate_leaves(catalog),
        translations: find_duplicate_translations(catalog),
    };

    // Duplicates are informational.
    Ok(finish(
        CommandSummary::Duplicates(summary),
        ctx.issues.clone(),
        false,
    ))
}
