//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, TraceFormat};
use crate::config::SgdrConfig;
use crate::optim::Phase;

/// sgdr: warm-restart learning-rate schedules
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sgdr")]
#[command(version)]
#[command(about = "Plan, check and export warm-restart (SGDR) learning-rate schedules")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Replay a schedule and print or export the per-step rates
    Simulate(SimulateArgs),

    /// Validate a schedule file
    Validate(ValidateArgs),

    /// Write a starter schedule file
    Init(InitArgs),

    /// Display the settings of a schedule file
    Info(InfoArgs),
}

/// Arguments for the simulate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SimulateArgs {
    /// Path to YAML schedule file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Number of epochs to replay
    #[arg(short, long, default_value_t = 20)]
    pub epochs: usize,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: TraceFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override steps per epoch
    #[arg(long)]
    pub steps_per_epoch: Option<usize>,

    /// Override the rate floor
    #[arg(long)]
    pub min_rate: Option<f64>,

    /// Override the initial rate ceiling
    #[arg(long)]
    pub max_rate: Option<f64>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML schedule file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Where to write the schedule file
    #[arg(short, long, default_value = "schedule.yaml")]
    pub output: PathBuf,

    /// Phase the schedule opens with (warmup, cooldown)
    #[arg(short, long, default_value = "warmup")]
    pub start: Phase,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML schedule file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a schedule
pub fn apply_overrides(config: &mut SgdrConfig, args: &SimulateArgs) {
    if let Some(steps) = args.steps_per_epoch {
        config.steps_per_epoch = steps;
    }
    if let Some(min_rate) = args.min_rate {
        config.min_rate = min_rate;
    }
    if let Some(max_rate) = args.max_rate {
        config.max_rate = max_rate;
    }
}
