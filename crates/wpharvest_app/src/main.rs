mod cli;
mod config;
mod logging;
mod progress;
mod run;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use engine_logging::level_for_verbosity;

use crate::cli::Cli;
use crate::config::load_config;
use crate::logging::LogDestination;
use crate::progress::TerminalProgress;
use crate::run::{export_site, finish, RunOutcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let destination = match cli.log_file.as_deref() {
        Some(path) => LogDestination::TerminalAndFile(path),
        None => LogDestination::Terminal,
    };
    logging::initialize(destination, level_for_verbosity(cli.verbose));

    finish(run(&cli))
}

fn run(cli: &Cli) -> Result<RunOutcome> {
    let config = load_config(cli.config.as_deref())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let sink = TerminalProgress::new(cli.quiet);
    runtime.block_on(export_site(cli, &config, &sink))
}
