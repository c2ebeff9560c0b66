//! Declarative schedule configuration
//!
//! A schedule is described in YAML, validated, and turned into an
//! [`SgdrScheduler`](crate::optim::SgdrScheduler).
//!
//! ```yaml
//! min_rate: 0.001
//! max_rate: 0.1
//! steps_per_epoch: 100
//! start_phase: warmup
//! warmup_length: 2
//! initial_cooldown_length: 3
//! first_drop_multiplier: 0.5
//! general_decay_multiplier: 0.9
//! ```

mod builder;
mod cli;
mod loader;
mod schema;
mod validate;

pub use builder::{build_scheduler, SgdrConfigBuilder};
pub use cli::{
    apply_overrides, parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, SimulateArgs,
    TraceFormat, ValidateArgs,
};
pub use loader::{load_config, parse_config, save_config};
pub use schema::{CooldownSwitch, SgdrConfig};
pub use validate::{validate_config, validate_epochs, ValidationError};
