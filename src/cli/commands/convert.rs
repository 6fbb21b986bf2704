use anyhow::Result;

use super::{
    super::args::ConvertCommand,
    CommandResult, CommandSummary, ConvertSummary,
    context::CommandContext,
    helper::{finish, source_position},
};
use crate::core::{CatalogMutator, convert_literal};

pub fn convert(cmd: ConvertCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let position = source_position(&cmd.position, &ctx.root_dir)?;
    let catalog = ctx.catalog(cmd.locale.as_deref())?;
    let (locale, catalog_file) = ctx.catalog_file(cmd.locale.as_deref())?;

    let key = cmd.key.trim().to_string();
    let mutator = CatalogMutator::from_config(&ctx.config);
    let (conversion, error) =
        match convert_literal(catalog, &mutator, &catalog_file, &position, &key) {
            Ok(conversion) => (Some(conversion), None),
            Err(e) if e.is_refusal() => (None, Some(e.to_string())),
            Err(e) => return Err(e.into()),
        };

    let summary = ConvertSummary {
        key,
        locale,
        catalog_file,
        position,
        root_dir: ctx.root_dir.clone(),
        conversion,
        error,
    };

    Ok(finish(CommandSummary::Convert(summary), Vec::new(), true))
}
