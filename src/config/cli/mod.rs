//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! sgdr simulate schedule.yaml --epochs 30
//! sgdr simulate schedule.yaml --format csv --output rates.csv
//! sgdr validate schedule.yaml --detailed
//! sgdr init --start cooldown
//! sgdr info schedule.yaml --format json
//! ```

mod core;
mod types;

pub use core::{
    apply_overrides, parse_args, Cli, Command, InfoArgs, InitArgs, SimulateArgs, ValidateArgs,
};
pub use types::{OutputFormat, TraceFormat};
