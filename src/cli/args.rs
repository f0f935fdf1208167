//! Argument structs for finder subcommands

use std::path::PathBuf;

use clap::Args;

use super::parse::parse_query_pair;

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Entity type (swimmer, team, pool, meeting, city)
    pub entity: String,

    /// Query fields as key=value (e.g. complete_name="Rossi Mario" year_of_birth=1970)
    #[arg(value_parser = parse_query_pair, required = true)]
    pub fields: Vec<(String, String)>,

    /// SQLite database holding the candidate tables
    #[arg(long, conflicts_with = "candidates")]
    pub db: Option<PathBuf>,

    /// JSON candidate file keyed by search method
    #[arg(long)]
    pub candidates: Option<PathBuf>,

    /// Override the strategy bias for this search
    #[arg(long)]
    pub bias: Option<f64>,

    /// Trace every inspected candidate
    #[arg(long)]
    pub debug: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CityArgs {
    /// City name to resolve
    pub name: String,

    /// Country code to search; guessed when omitted
    #[arg(long, short)]
    pub country: Option<String>,

    /// Gazetteer file (TOML or JSON)
    #[arg(long)]
    pub gazetteer: Option<PathBuf>,

    /// Override the city bias
    #[arg(long)]
    pub bias: Option<f64>,

    /// Trace every inspected city
    #[arg(long)]
    pub debug: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CountryArgs {
    /// Country name or code
    pub name_or_code: String,

    /// Gazetteer file (TOML or JSON)
    #[arg(long)]
    pub gazetteer: Option<PathBuf>,

    /// Trace every inspected country
    #[arg(long)]
    pub debug: bool,
}
