//! sgdr CLI
//!
//! Plan and inspect warm-restart learning-rate schedules.
//!
//! # Usage
//!
//! ```bash
//! # Write a starter schedule
//! sgdr init --start cooldown
//!
//! # Check it
//! sgdr validate schedule.yaml --detailed
//!
//! # Replay 30 epochs and export per-step rates
//! sgdr simulate schedule.yaml --epochs 30 --format csv --output rates.csv
//! ```

use clap::Parser;
use sgdr::cli::{run_command, Cli, LogLevel};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = LogLevel::from_flags(cli.verbose, cli.quiet);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.filter_directive())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
