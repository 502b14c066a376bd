use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;

use super::{BuildSummary, CommandResult, CommandSummary, context::CommandContext};
use crate::{
    cli::args::BuildCommand,
    core::{CollectingSink, FanoutTransformer, TranslationEngine, lang_prefix},
    scanner::scan_sources,
    writer::OutputWriter,
};

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let source_root = ctx.resolve(cmd.source_root.as_deref(), &ctx.config.source_root);
    let output_root = ctx.resolve(cmd.output_root.as_deref(), &ctx.config.output_root);

    let store = ctx.store();
    let locales = store.locales()?;
    store.catalogs()?;

    let mut warnings = Vec::new();
    if locales.is_empty() {
        warnings.push(format!(
            "no locales found in '{}'",
            store.root().display()
        ));
    }

    // Outputs for non-default locales land in prefix directories of the
    // output root; when it is also the source root they must not be rescanned.
    let skip_dirs: Vec<String> = if same_dir(&source_root, &output_root) {
        locales
            .iter()
            .map(|locale| lang_prefix(locale, Some(ctx.default_locale.as_str())))
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| prefix.trim_end_matches('/').to_string())
            .collect()
    } else {
        Vec::new()
    };

    let scan = scan_sources(
        &source_root,
        &ctx.config.include_patterns()?,
        &ctx.config.ignore_patterns()?,
        &skip_dirs,
    )?;
    if scan.skipped_count > 0 {
        warnings.push(format!(
            "{} path(s) skipped due to access errors",
            scan.skipped_count
        ));
    }

    let sink = CollectingSink::new();
    let transformer = FanoutTransformer::new(TranslationEngine::new(&store).with_sink(&sink));
    let writer = OutputWriter::new(&output_root, &ctx.default_locale).dry_run(cmd.dry_run);

    let written: Vec<Vec<PathBuf>> = scan
        .files
        .par_iter()
        .map(|file| {
            let request = file.read_request()?;
            let mut results = Vec::new();
            transformer
                .fan_out(&request, &mut results)
                .with_context(|| format!("Failed to translate {}", file.relative.display()))?;
            results
                .iter()
                .map(|result| writer.write(result, &file.relative))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<_>>()?;

    transformer.finish().with_context(|| {
        format!(
            "No files to translate under '{}'",
            source_root.display()
        )
    })?;

    let mut written: Vec<PathBuf> = written.into_iter().flatten().collect();
    written.sort();
    info!(
        files = scan.files.len(),
        outputs = written.len(),
        "build finished"
    );

    // A missing catalog is reported once per file; one warning per locale is enough.
    let mut missing: Vec<String> = sink.take().into_iter().map(|e| e.to_string()).collect();
    missing.sort();
    missing.dedup();
    warnings.extend(missing);

    Ok(CommandResult::new(CommandSummary::Build(BuildSummary {
        file_count: scan.files.len(),
        locale_count: locales.len(),
        written,
        is_dry_run: cmd.dry_run,
    }))
    .with_warnings(warnings, true))
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
