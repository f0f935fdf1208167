//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::TableMapping;
use crate::strategy::CITY_BIAS;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Finder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Bias overrides keyed by entity type name
    #[serde(default)]
    pub bias: BTreeMap<String, f64>,

    /// Geographic city resolution
    #[serde(default)]
    pub city: CityConfig,

    /// Country resolution
    #[serde(default)]
    pub country: CountryConfig,

    /// Candidate store location and table layout
    #[serde(default)]
    pub store: StoreConfig,
}

/// Configuration for the city resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityConfig {
    #[serde(default = "default_geo_bias")]
    pub bias: f64,

    /// Country codes tried first when a city is searched without a country
    #[serde(default = "default_preferred_countries")]
    pub preferred_countries: Vec<String>,

    /// Gazetteer file (TOML or JSON)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gazetteer: Option<PathBuf>,
}

/// Configuration for the country resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryConfig {
    #[serde(default = "default_geo_bias")]
    pub bias: f64,
}

/// Candidate store configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database holding the candidate tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// JSON candidate file, used when no database is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<PathBuf>,

    /// Table overrides keyed by search method name
    #[serde(default)]
    pub tables: BTreeMap<String, TableMapping>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            version: CONFIG_FORMAT_VERSION,
            bias: BTreeMap::new(),
            city: CityConfig::default(),
            country: CountryConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        CityConfig {
            bias: default_geo_bias(),
            preferred_countries: default_preferred_countries(),
            gazetteer: None,
        }
    }
}

impl Default for CountryConfig {
    fn default() -> Self {
        CountryConfig {
            bias: default_geo_bias(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_geo_bias() -> f64 {
    CITY_BIAS
}

fn default_preferred_countries() -> Vec<String> {
    vec!["IT".to_string()]
}
