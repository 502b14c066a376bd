use std::{fs, io, path::Path};

use anyhow::{Context, Result, anyhow};

use super::{CommandResult, CommandSummary, TranslateSummary, context::CommandContext};
use crate::{
    cli::args::TranslateCommand,
    core::{FanoutTransformer, FileType, TranslationEngine, TranslationRequest},
};

/// Translates a single file with no error sink: a locale without a catalog
/// aborts the command.
pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let file_type = match cmd.file_type {
        Some(file_type) => file_type,
        None => infer_file_type(&cmd.file)?,
    };

    let content = if cmd.file.as_os_str() == "-" {
        io::read_to_string(io::stdin()).context("Failed to read stdin")?
    } else {
        fs::read_to_string(&cmd.file)
            .with_context(|| format!("Failed to read file: {}", cmd.file.display()))?
    };

    let store = ctx.store();
    let transformer = FanoutTransformer::new(TranslationEngine::new(&store));
    let request = TranslationRequest::new(content, file_type).with_path(&cmd.file);
    let results = transformer
        .stream([request])
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to translate {}", cmd.file.display()))?;

    Ok(CommandResult::new(CommandSummary::Translate(
        TranslateSummary {
            results,
            json: cmd.json,
        },
    )))
}

fn infer_file_type(path: &Path) -> Result<FileType> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(FileType::from_extension)
        .ok_or_else(|| {
            anyhow!(
                "Cannot infer the file type of '{}'; pass --type",
                path.display()
            )
        })
}
