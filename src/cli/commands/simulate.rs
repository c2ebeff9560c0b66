//! Simulate command implementation

use super::report;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{
    apply_overrides, load_config, validate_config, validate_epochs, SimulateArgs, TraceFormat,
};
use crate::optim::DropKind;
use crate::train::{EpochRecord, ScheduleDriver, ScheduleTrace};

fn describe_event(record: &EpochRecord) -> String {
    let mut events = Vec::new();
    if let Some(phase) = record.restart {
        events.push(format!("restart -> {phase}"));
    }
    match record.drop {
        Some(DropKind::First) => events.push("first drop".to_string()),
        Some(DropKind::General) => events.push("decay".to_string()),
        None => {}
    }
    events.join(", ")
}

/// One row per completed epoch
pub fn render_table(trace: &ScheduleTrace) -> String {
    let mut out = format!(
        "{:>6}  {:<8}  {:>12}  {:>12}  {:>8}  {}\n",
        "epoch", "phase", "lr", "max_rate", "restart", "event"
    );
    for record in &trace.epochs {
        out.push_str(&format!(
            "{:>6}  {:<8}  {:>12.6e}  {:>12.6e}  {:>8}  {}\n",
            record.epoch,
            record.phase.to_string(),
            record.lr,
            record.max_rate,
            record.next_restart_epoch,
            describe_event(record)
        ));
    }
    out
}

/// Render a trace in the requested format
pub fn render_trace(trace: &ScheduleTrace, format: TraceFormat) -> Result<String, String> {
    match format {
        TraceFormat::Table => Ok(render_table(trace)),
        TraceFormat::Json => serde_json::to_string_pretty(trace)
            .map(|json| json + "\n")
            .map_err(report),
        TraceFormat::Csv => trace.history.to_csv().map_err(report),
    }
}

pub fn run_simulate(args: SimulateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Simulating schedule: {}", args.config.display()),
    );

    let mut config = load_config(&args.config).map_err(report)?;
    apply_overrides(&mut config, &args);
    validate_config(&config).map_err(report)?;
    validate_epochs(args.epochs).map_err(report)?;

    let trace = ScheduleDriver::new(config).run(args.epochs);
    let rendered = render_trace(&trace, args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "Wrote {} steps ({}) to {}",
                    trace.history.steps(),
                    args.format,
                    path.display()
                ),
            );
        }
        None => print!("{rendered}"),
    }

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "{} restarts over {} epochs",
            trace.restarts().count(),
            trace.epochs.len()
        ),
    );

    Ok(())
}
