use std::process::ExitCode;

use drills_cli::commands::{self, estimate, estimate::CommandLine};
use drills_cli::terminal::logging;
use drills_common::config::Config;

fn main() -> ExitCode {
    CommandLine::parse_args();

    if let Err(e) = logging::init_logging() {
        eprintln!("{e}");
    }

    let cfg = Config::default();

    commands::exit_code(estimate::estimate(&cfg))
}
