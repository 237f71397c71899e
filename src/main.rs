//! calculator: prints the simple calculator demo transcript.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io;
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use calculator::demo::DemoRunner;
use calculator::logging;

use cli::args::Cli;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    logging::setup().map_err(|e| anyhow!("failed to initialise logging: {e}"))?;

    let runner = DemoRunner::default();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    runner.run(&mut handle).context("demo run failed")?;

    Ok(())
}
