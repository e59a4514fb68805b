//! Core library entry for `dashclock`.
//!
//! The clock itself is [`updater::ClockUpdater`] started through
//! [`schedule::initialize`]. Everything else wires it to a host: ports and
//! adapters for time and output surfaces, cassettes, and the CLI.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod logging;
pub mod ports;
pub mod schedule;
pub mod updater;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    // Loaded before parsing so `.env` values can feed clap's env fallbacks.
    let dotenv = config::load_dotenv();
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    config::log_dotenv(&dotenv);
    commands::dispatch(&cli.command)
}
