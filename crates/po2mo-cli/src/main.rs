#![forbid(unsafe_code)]

mod cli;
mod command_compile;
mod command_inspect;
mod config;
mod error;
mod logging;
mod report;

use std::process::ExitCode;

use crate::cli::CliAppError;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliAppError::Usage(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
