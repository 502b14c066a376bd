//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Translate every matching file of the source tree into each locale
//! - `translate`: Translate a single file and print one copy per locale
//! - `lookup`: Look up one source string in a locale's catalog
//! - `locales`: List discovered locales and their output prefixes
//! - `init`: Initialize a .statici18nrc.json configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::FileType;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory used to find .statici18nrc.json
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Catalog root directory (overrides config file)
    #[arg(long, env = "STATICI18N_LOCALE_DIR")]
    pub locale_dir: Option<PathBuf>,

    /// Locale written without a prefix directory (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory holding the files to translate (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory receiving the per-locale copies (overrides config file)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Report what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// File to translate, or `-` for stdin
    pub file: PathBuf,

    /// File type (inferred from the extension when omitted)
    #[arg(long = "type", value_parser = parse_file_type)]
    pub file_type: Option<FileType>,

    /// Print one JSON event per locale
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    pub locale: String,

    /// Source string as it appears inside gettext()
    pub text: String,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write one translated copy of every matching source file per locale
    Build(BuildCommand),
    /// Translate a single file and print the result for each locale
    Translate(TranslateCommand),
    /// Look up a source string in one locale's catalog
    Lookup(LookupCommand),
    /// List the locales found in the catalog root
    Locales(LocalesCommand),
    /// Initialize a new .statici18nrc.json configuration file
    Init,
}

fn parse_file_type(value: &str) -> Result<FileType, String> {
    value.parse().map_err(|e: crate::core::TranslateError| e.to_string())
}
