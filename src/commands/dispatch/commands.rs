//! Command implementations for all finder commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{city, country, find};
use finder_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Find(args) => find::execute(ctx, args),
            Commands::City(args) => city::execute(ctx, args),
            Commands::Country(args) => country::execute(ctx, args),
        }
    }
}
