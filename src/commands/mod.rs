//! Command dispatch and handlers.

pub mod once;
pub mod replay;
pub mod run;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Run(args) => run::run(args),
        Command::Once { at } => once::run(*at),
        Command::Replay { cassette, element, verify } => replay::run(cassette, element, *verify),
    }
}
