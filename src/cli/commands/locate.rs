use anyhow::Result;

use super::{
    super::args::LocateCommand, CommandResult, CommandSummary, LocateSummary,
    context::CommandContext,
    helper::{finish, resolve_identifier},
};
use crate::error::CatalogError;

pub fn locate(cmd: LocateCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = resolve_identifier(&cmd.identifier, &ctx.root_dir)?;
    let catalog = ctx.catalog(cmd.locale.as_deref())?;

    let (location, error) = match catalog.locate(&path) {
        Ok(location) => (Some(location), None),
        Err(e @ CatalogError::PathNotFound { .. }) => (None, Some(e.to_string())),
        Err(e) => return Err(e.into()),
    };

    Ok(finish(
        CommandSummary::Locate(LocateSummary {
            path,
            location,
            error,
        }),
        Vec::new(),
        true,
    ))
}
