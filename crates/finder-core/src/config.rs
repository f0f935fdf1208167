//! Finder configuration
//!
//! Configuration lives in `config.toml` under the user configuration
//! directory, or under `$FINDER_CONFIG_DIR` when set. A missing default file
//! yields the built-in defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{FinderError, Result};
use crate::store::{SearchMethod, TableMapping};
use crate::strategy::EntityType;

pub use types::{CityConfig, CountryConfig, FinderConfig, StoreConfig, CONFIG_FORMAT_VERSION};

impl FinderConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FinderError::not_found(
                "config file",
                path.display().to_string(),
            ));
        }
        let content = fs::read_to_string(path)?;
        let config: FinderConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the default configuration file, falling back to defaults when absent
    pub fn load_default() -> Result<Self> {
        let path = global::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        tracing::debug!(
            source = %global::source_display(),
            path = %path.display(),
            "loading configuration"
        );
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FinderError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Check entity names, search method names and bias ranges
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        for (name, bias) in &self.bias {
            name.parse::<EntityType>()?;
            check_bias(&format!("bias for {}", name), *bias)?;
        }
        check_bias("city bias", self.city.bias)?;
        check_bias("country bias", self.country.bias)?;
        self.table_overrides()?;
        Ok(())
    }

    /// Table overrides with their search methods resolved
    pub fn table_overrides(&self) -> Result<Vec<(SearchMethod, TableMapping)>> {
        self.store
            .tables
            .iter()
            .map(|(name, mapping)| Ok((name.parse::<SearchMethod>()?, mapping.clone())))
            .collect()
    }
}

fn check_bias(context: &str, bias: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&bias) {
        bail_invalid!(context, bias);
    }
    Ok(())
}
