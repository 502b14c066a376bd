use std::path::PathBuf;

use crate::core::TranslationResult;

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Translate(TranslateSummary),
    Lookup(LookupSummary),
    Locales(LocalesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    pub file_count: usize,
    pub locale_count: usize,
    pub written: Vec<PathBuf>,
    pub is_dry_run: bool,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub results: Vec<TranslationResult>,
    pub json: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub translation: String,
}

#[derive(Debug)]
pub struct LocaleInfo {
    pub locale: String,
    /// Output prefix, empty for the default locale.
    pub prefix: String,
    /// Number of catalog entries, `None` when the catalog could not be loaded.
    pub entries: Option<usize>,
}

#[derive(Debug)]
pub struct LocalesSummary {
    pub locales: Vec<LocaleInfo>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running statici18n commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Problems that degraded the output without stopping the command.
    pub warnings: Vec<String>,
    /// If true, exit code 1 should be returned when there are warnings.
    pub exit_on_warnings: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            warnings: Vec::new(),
            exit_on_warnings: false,
        }
    }

    pub fn with_warnings(self, warnings: Vec<String>, exit_on_warnings: bool) -> Self {
        Self {
            warnings,
            exit_on_warnings,
            ..self
        }
    }
}
