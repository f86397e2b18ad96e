//! Command dispatch: bridges CLI args -> document loading -> output formatting.

pub mod check;
pub mod config_cmd;
pub mod interfaces;
pub mod util;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a document-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Interfaces(args) => interfaces::handle(args, settings),
        Command::Check(args) => check::handle(&args, settings),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
