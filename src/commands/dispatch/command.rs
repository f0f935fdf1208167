//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use finder_core::config::FinderConfig;
use finder_core::error::Result;
use finder_core::geo::Gazetteer;
use finder_core::{bail_invalid, bail_usage};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: FinderConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Load the configuration named by `--config`, or the default one
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => FinderConfig::load(path)?,
            None => FinderConfig::load_default()?,
        };
        Ok(Self { cli, config, start })
    }

    /// Load the gazetteer given on the command line or in the configuration
    pub fn gazetteer(&self, explicit: Option<&PathBuf>) -> Result<Arc<Gazetteer>> {
        let Some(path) = explicit.or(self.config.city.gazetteer.as_ref()) else {
            bail_usage!("no gazetteer configured; pass --gazetteer or set city.gazetteer");
        };
        Ok(Arc::new(Gazetteer::load(path)?))
    }
}

/// Reject a bias outside `[0, 1]`
pub fn check_bias(bias: Option<f64>) -> Result<Option<f64>> {
    if let Some(bias) = bias {
        if !(0.0..=1.0).contains(&bias) {
            bail_invalid!("bias", bias);
        }
    }
    Ok(bias)
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("finder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Fuzzy entity resolution for swimming results.");
        println!();
        println!("Run `finder --help` for usage information.");
        Ok(())
    }
}
