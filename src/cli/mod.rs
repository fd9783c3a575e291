//! Command-line interface: argument parsing, command handlers and
//! terminal reporting.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };
    let verbose = args.verbose();

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status().into())
}
