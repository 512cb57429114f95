use std::io;

use anyhow::Context;
use clap::Parser;
use drills_common::config::Config;
use drills_common::estimator;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "estimator", version)]
#[command(about = "Quote a carpet cleaning job from the number of small and large rooms.")]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub fn estimate(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let estimate = estimator::run(stdin.lock(), stdout.lock(), cfg)
        .context("could not produce an estimate")?;

    info!(total = estimate.total, "estimate printed");
    Ok(())
}
