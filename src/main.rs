//! Binary entrypoint for the `dashclock` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match dashclock::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
