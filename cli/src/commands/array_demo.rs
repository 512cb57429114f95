use std::io;

use anyhow::Context;
use clap::Parser;
use drills_common::array_demo;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "array-demo", version)]
#[command(about = "Show that nesting a sequence stores a copy, not an alias.")]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub fn array_demo() -> anyhow::Result<()> {
    let report = array_demo::run(io::stdout().lock()).context("array demo failed")?;

    info!(
        before = report.nested_before,
        after = report.nested_after,
        "nested element read twice"
    );
    Ok(())
}
