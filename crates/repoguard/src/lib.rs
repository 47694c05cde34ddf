//! # repoguard
//!
//! **CLI Binary**
//!
//! This is the entry point for the `repoguard` command-line application.
//! It wires the guard crates to the command line.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Resolve the repository root and load `repoguard.toml`
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod git;
mod logging;

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use repoguard_config::Cli;

/// How a command finished. Runtime errors are reported separately through
/// `anyhow::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardStatus {
    /// Check passed, or was skipped by the permissive fallback.
    Pass,
    /// Check failed or the command was used incorrectly.
    Fail,
}

impl From<GuardStatus> for ExitCode {
    fn from(status: GuardStatus) -> Self {
        match status {
            GuardStatus::Pass => ExitCode::SUCCESS,
            GuardStatus::Fail => ExitCode::FAILURE,
        }
    }
}

/// Entry point used by the `repoguard` binary.
pub fn run() -> Result<GuardStatus> {
    run_from(std::env::args_os())
}

/// Run with an explicit argument list (the first item is the program name).
pub fn run_from<I, T>(args: I) -> Result<GuardStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    logging::init(cli.global.verbose);
    commands::dispatch(cli)
}

/// Render an error with actionable hints for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
