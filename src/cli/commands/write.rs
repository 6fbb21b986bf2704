use anyhow::Result;

use super::{
    super::args::WriteCommand, CommandResult, CommandSummary, WriteSummary,
    context::CommandContext,
    helper::{finish, resolve_identifier},
};
use crate::core::CatalogMutator;

/// `create` (overwrite = false) and `change` (overwrite = true).
pub fn write(cmd: WriteCommand, overwrite: bool) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = resolve_identifier(&cmd.identifier, &ctx.root_dir)?;
    let (locale, file_path) = ctx.catalog_file(cmd.locale.as_deref())?;

    let mutator = CatalogMutator::from_config(&ctx.config);
    let (action, error, conflict) =
        match mutator.upsert(&file_path, &path, &cmd.value, overwrite) {
            Ok(action) => (Some(action), None, false),
            Err(e) if e.is_refusal() => (None, Some(e.to_string()), e.is_conflict()),
            Err(e) => return Err(e.into()),
        };

    let summary = WriteSummary {
        path,
        locale,
        file_path,
        overwrite,
        action,
        error,
        conflict,
    };

    Ok(finish(CommandSummary::Write(summary), Vec::new(), true))
}
