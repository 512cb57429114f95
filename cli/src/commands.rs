pub mod array_demo;
pub mod estimate;

use std::process::ExitCode;

use crate::terminal::logging;

/// Maps a command result to the process exit status, logging any error.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::report(&e);
            ExitCode::FAILURE
        }
    }
}
