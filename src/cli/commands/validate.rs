//! Validate command implementation

use super::report;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{build_scheduler, load_config, SgdrConfig, ValidateArgs};

/// Format rate bounds as a string
pub fn format_rate_info(config: &SgdrConfig) -> String {
    format!(
        "  Min rate: {}\n  Max rate: {}\n  Steps per epoch: {}",
        config.min_rate, config.max_rate, config.steps_per_epoch
    )
}

/// Format phase lengths as a string
pub fn format_phase_info(config: &SgdrConfig) -> String {
    let mut lines = vec![
        format!("  Start phase: {}", config.start_phase),
        format!(
            "  Warmup: {} epochs (growth {})",
            config.warmup_length, config.warmup_growth
        ),
        format!(
            "  Cooldown: {} epochs (growth {})",
            config.initial_cooldown_length, config.cooldown_growth
        ),
    ];
    if config.disable_post_warmup_growth {
        lines.push("  Warmup pinned to 1 epoch after first drop".to_string());
    }
    lines.join("\n")
}

/// Format ceiling drops as a string
pub fn format_drop_info(config: &SgdrConfig) -> String {
    format!(
        "  First drop: x{}\n  Later drops: x{}",
        config.first_drop_multiplier, config.general_decay_multiplier
    )
}

/// Format the cooldown policy switch as a string
pub fn format_switch_info(config: &SgdrConfig) -> Option<String> {
    config.post_switch.map(|switch| {
        format!(
            "  Cooldown switch:\n    After cooldowns: {}\n    Length: {}\n    Growth: {}",
            switch.after_cooldowns, switch.length, switch.growth
        )
    })
}

/// Print detailed configuration summary
pub fn print_detailed_summary(config: &SgdrConfig) {
    println!();
    println!("Schedule Summary:");
    println!("{}", format_rate_info(config));
    println!();
    println!("{}", format_phase_info(config));
    println!();
    println!("{}", format_drop_info(config));

    if let Some(switch_info) = format_switch_info(config) {
        println!();
        println!("{switch_info}");
    }

    let scheduler = build_scheduler(config);
    println!();
    println!("  First restart after epoch {}", scheduler.next_restart_epoch());
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating schedule: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(report)?;

    log(level, LogLevel::Normal, "Schedule is valid");

    if args.detailed {
        print_detailed_summary(&config);
    }

    Ok(())
}
