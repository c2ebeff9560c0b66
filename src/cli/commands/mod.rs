//! CLI command implementations

mod info;
mod init;
mod simulate;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};
use crate::error::SgdrError;

/// Console message for a failed command, tagged with the error code
pub(crate) fn report(err: impl Into<SgdrError>) -> String {
    let err = err.into();
    let code = err.code();
    match err {
        SgdrError::Validation(inner) => format!("Validation failed [{code}]: {inner}"),
        other if other.is_user_error() => format!("Config error [{code}]: {other}"),
        other => format!("System error [{code}]: {other}"),
    }
}

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Simulate(args) => simulate::run_simulate(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}
