use anyhow::Result;

use super::{CommandResult, CommandSummary, LookupSummary, context::CommandContext};
use crate::{cli::args::LookupCommand, core::TranslationEngine};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let store = ctx.store();
    let translation = TranslationEngine::new(&store).lookup(&cmd.locale, &cmd.text)?;

    Ok(CommandResult::new(CommandSummary::Lookup(LookupSummary {
        translation,
    })))
}
