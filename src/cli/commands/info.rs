//! Info command implementation

use super::report;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{build_scheduler, load_config, InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(report)?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Schedule Info:");
            println!();
            println!("Rates: {} .. {}", config.min_rate, config.max_rate);
            println!("Steps per epoch: {}", config.steps_per_epoch);
            println!("Start phase: {}", config.start_phase);
            println!(
                "Warmup: {} epochs x{}, cooldown: {} epochs x{}",
                config.warmup_length,
                config.warmup_growth,
                config.initial_cooldown_length,
                config.cooldown_growth
            );
            println!(
                "Drops: first x{}, then x{}",
                config.first_drop_multiplier, config.general_decay_multiplier
            );
            println!(
                "First restart after epoch {}",
                build_scheduler(&config).next_restart_epoch()
            );

            if config.post_switch.is_some() {
                println!("Cooldown switch: enabled");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)
                .map_err(report)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&config)
                .map_err(report)?;
            println!("{yaml}");
        }
    }

    Ok(())
}
