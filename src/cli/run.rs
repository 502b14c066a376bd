use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, build::build, init::init, locales::locales, lookup::lookup,
        translate::translate,
    },
};

/// Dispatches to the handler of the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to print and any warnings
/// - `Err` if the command fails (missing locale directory, unsupported type, ...)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Locales(cmd)) => locales(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
