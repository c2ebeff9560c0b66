//! Init command implementation

use super::report;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{save_config, InitArgs, SgdrConfig};
use crate::optim::Phase;

/// Starter schedule for the given opening phase
///
/// Short warmups with geometrically growing cooldowns; the ceiling halves
/// once and then decays by 10% before every restart.
pub fn starter_config(start: Phase) -> SgdrConfig {
    SgdrConfig::builder()
        .rates(1e-5, 1e-3)
        .steps_per_epoch(100)
        .start_phase(start)
        .warmup(1.0, 1.0)
        .cooldown(2.0, 2.0)
        .drops(0.5, 0.9)
        .build()
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        ));
    }

    let config = starter_config(args.start);
    save_config(&config, &args.output).map_err(report)?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Created {} (starts in {})",
            args.output.display(),
            args.start
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("Try: sgdr simulate {} --epochs 20", args.output.display()),
    );

    Ok(())
}
