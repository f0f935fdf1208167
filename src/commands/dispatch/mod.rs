//! Command dispatch logic for finder

use std::time::Instant;

use crate::cli::Cli;
use finder_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{check_bias, CommandContext};
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::load(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
