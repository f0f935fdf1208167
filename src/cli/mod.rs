//! CLI argument parsing for finder
//!
//! Supports global flags: --config, --format, --quiet, --verbose

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{CityArgs, CountryArgs, FindArgs};
pub use finder_core::format::OutputFormat;
use parse::parse_format;

/// Finder - fuzzy entity resolution for swimming results
#[derive(Parser, Debug)]
#[command(name = "finder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ~/.config/finder/config.toml)
    #[arg(long, global = true, env = "FINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events, including per-candidate scan traces
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "finder_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the stored entity best matching key=value query fields
    Find(FindArgs),

    /// Resolve a city name against the gazetteer
    City(CityArgs),

    /// Resolve a country name or code against the gazetteer
    Country(CountryArgs),
}

impl Commands {
    /// True when the subcommand asked for per-candidate scan traces
    pub fn wants_debug(&self) -> bool {
        match self {
            Commands::Find(args) => args.debug,
            Commands::City(args) => args.debug,
            Commands::Country(args) => args.debug,
        }
    }
}
