//! Finder - fuzzy entity resolution CLI
//!
//! Resolves free-text swimmer, team, pool, meeting, city and country names
//! against a results database or an in-memory gazetteer.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use finder_core::error::{ExitCode as FinderExitCode, FinderError};
use finder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    let verbose = cli.verbose || cli.command.as_ref().is_some_and(|c| c.wants_debug());
    if let Err(e) = logging::init_tracing(verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => FinderExitCode::Success.into(),
        Err(err) => report(&cli, &err),
    }
}

/// Clap failed before `Cli.format` exists; honour a JSON request seen in argv
fn parse_failure(err: clap::Error) -> ExitCode {
    if !argv_requests_json() {
        err.exit();
    }

    let finder_error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict => FinderError::UsageError(err.to_string()),
        _ => FinderError::Other(err.to_string()),
    };
    eprintln!("{}", finder_error.to_json());
    finder_error.exit_code().into()
}

fn report(cli: &Cli, err: &FinderError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", err),
    }
    err.exit_code().into()
}

fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
