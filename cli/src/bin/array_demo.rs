use std::process::ExitCode;

use drills_cli::commands::{self, array_demo, array_demo::CommandLine};
use drills_cli::terminal::logging;

fn main() -> ExitCode {
    CommandLine::parse_args();

    if let Err(e) = logging::init_logging() {
        eprintln!("{e}");
    }

    commands::exit_code(array_demo::array_demo())
}
