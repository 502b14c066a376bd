//! Report formatting and printing utilities.
//!
//! Separate from the commands so the engine can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    BuildSummary, CommandResult, CommandSummary, InitSummary, LocalesSummary, LookupSummary,
    TranslateSummary,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Maximum number of written paths listed without `-v`.
const MAX_PATHS_DISPLAY: usize = 10;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock(), &mut io::stderr().lock());
}

pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, out),
        CommandSummary::Translate(summary) => print_translate(summary, out),
        CommandSummary::Lookup(summary) => print_lookup(summary, out),
        CommandSummary::Locales(summary) => print_locales(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
    print_warnings(&result.warnings, err);
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_build<W: Write>(summary: &BuildSummary, verbose: bool, out: &mut W) {
    let shown = if verbose {
        summary.written.len()
    } else {
        summary.written.len().min(MAX_PATHS_DISPLAY)
    };
    for path in &summary.written[..shown] {
        let _ = writeln!(out, "  {} {}", "→".dimmed(), path.display());
    }
    if shown < summary.written.len() {
        let _ = writeln!(
            out,
            "  {}",
            format!("... and {} more (use -v to list all)", summary.written.len() - shown).dimmed()
        );
    }

    let verb = if summary.is_dry_run {
        "Would write"
    } else {
        "Wrote"
    };
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} {} for {} in {}",
            verb,
            plural(summary.written.len(), "file", "files"),
            plural(summary.file_count, "source file", "source files"),
            plural(summary.locale_count, "locale", "locales"),
        )
        .green()
    );
}

fn print_translate<W: Write>(summary: &TranslateSummary, out: &mut W) {
    for result in &summary.results {
        if summary.json {
            match serde_json::to_string(result) {
                Ok(line) => {
                    let _ = writeln!(out, "{}", line);
                }
                Err(e) => {
                    let _ = writeln!(out, "{}", e);
                }
            }
        } else {
            let _ = writeln!(out, "{}", format!("== {} ==", result.lang).bold());
            let _ = write!(out, "{}", result.translation);
            if !result.translation.ends_with('\n') {
                let _ = writeln!(out);
            }
        }
    }
}

fn print_lookup<W: Write>(summary: &LookupSummary, out: &mut W) {
    let _ = writeln!(out, "{}", summary.translation);
}

fn print_locales<W: Write>(summary: &LocalesSummary, out: &mut W) {
    let prefixes: Vec<&str> = summary
        .locales
        .iter()
        .map(|info| {
            if info.prefix.is_empty() {
                "(root)"
            } else {
                info.prefix.as_str()
            }
        })
        .collect();
    let width = summary
        .locales
        .iter()
        .map(|info| info.locale.len())
        .max()
        .unwrap_or(0);
    let prefix_width = prefixes.iter().map(|p| p.len()).max().unwrap_or(0);

    for (info, prefix) in summary.locales.iter().zip(&prefixes) {
        let prefix = format!("{:<width$}", prefix, width = prefix_width);
        let entries = match info.entries {
            Some(count) => plural(count, "entry", "entries"),
            None => "no catalog".red().to_string(),
        };
        let locale = format!("{:<width$}", info.locale, width = width);
        let _ = writeln!(out, "{}  {}  {}", locale.bold(), prefix.cyan(), entries);
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn print_warnings<W: Write>(warnings: &[String], err: &mut W) {
    for warning in warnings {
        let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), warning);
    }
}
