use anyhow::Result;

use super::{CommandResult, CommandSummary, LocaleInfo, LocalesSummary, context::CommandContext};
use crate::{cli::args::LocalesCommand, core::lang_prefix};

pub fn locales(cmd: LocalesCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let store = ctx.store();
    let catalogs = store.catalogs()?;

    let mut locales: Vec<LocaleInfo> = store
        .locales()?
        .iter()
        .map(|locale| LocaleInfo {
            locale: locale.clone(),
            prefix: lang_prefix(locale, Some(ctx.default_locale.as_str())),
            entries: catalogs.get(locale).map(|catalog| catalog.len()),
        })
        .collect();
    locales.sort_by(|a, b| a.locale.cmp(&b.locale));

    let warnings = locales
        .iter()
        .filter(|info| info.entries.is_none())
        .map(|info| format!("no catalog found at '{}'", store.catalog_path(&info.locale).display()))
        .collect();

    Ok(CommandResult::new(CommandSummary::Locales(LocalesSummary { locales }))
        .with_warnings(warnings, false))
}
