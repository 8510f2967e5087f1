//! Roster command-line front end.
//!
//! Usage:
//!   roster init --db students.db
//!   roster add --db students.db --name "Ann Lee" --grade 90 --course Math
//!   roster search --db students.db --convention caller-buffer ann
//!
//! Search results are printed as JSON on stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use roster_cli::{run, Cli};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let ok = run(cli.command, &mut std::io::stdout().lock())?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
