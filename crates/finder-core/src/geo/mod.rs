//! Geographic name resolution over an in-memory gazetteer
//!
//! Unlike the entity strategies, city and country lookups never touch a
//! candidate store: the whole dictionary is loaded once from a TOML or JSON
//! file and shared read-only.
//!
//! ```toml
//! [[countries]]
//! code = "IT"
//! name = "Italia"
//! cities = [
//!     { key = "reggio emilia", name = "Reggio Emilia", area = "RE" },
//! ]
//! ```

mod city;
mod country;
mod pattern;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};

pub use city::CityFinder;
pub use country::CountryFinder;
pub use pattern::{tokenize, Locale, TokenizedPattern};

/// A city entry of the gazetteer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Dictionary key, usually the ASCII spelling
    pub key: String,
    /// Display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Code of the owning country, filled in when the gazetteer is built
    #[serde(default)]
    pub country_code: String,
}

impl City {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        City {
            key: key.into(),
            name: name.into(),
            area: None,
            country_code: String::new(),
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }
}

/// A country with its cities in dictionary order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing)]
    pub cities: Vec<City>,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Country {
            code: code.into(),
            name: name.into(),
            cities: Vec::new(),
        }
    }

    pub fn with_city(mut self, city: City) -> Self {
        self.cities.push(city);
        self
    }
}

#[derive(Debug, Deserialize)]
struct GazetteerFile {
    #[serde(default)]
    countries: Vec<Country>,
}

/// Country to city dictionary, immutable once built
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gazetteer {
    countries: Vec<Country>,
}

impl Gazetteer {
    /// Build a gazetteer, normalizing country codes to upper case
    pub fn new(countries: Vec<Country>) -> Self {
        let countries = countries
            .into_iter()
            .map(|mut country| {
                country.code = country.code.trim().to_uppercase();
                for city in &mut country.cities {
                    city.country_code = country.code.clone();
                }
                country
            })
            .collect();
        Gazetteer { countries }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: GazetteerFile = toml::from_str(content)?;
        Ok(Self::new(file.countries))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: GazetteerFile = serde_json::from_str(content)?;
        Ok(Self::new(file.countries))
    }

    /// Load a gazetteer file; `.json` files are read as JSON, anything else as TOML
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FinderError::not_found(
                "gazetteer",
                path.display().to_string(),
            ));
        }
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let gazetteer = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::debug!(countries = gazetteer.countries.len(), "gazetteer loaded");
        Ok(gazetteer)
    }

    /// Countries in declaration order
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Look up a country by code, ignoring case
    pub fn country(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|country| country.code.eq_ignore_ascii_case(code))
    }

    /// Cities of `code`; empty for an unknown country
    pub fn cities(&self, code: &str) -> &[City] {
        self.country(code)
            .map(|country| country.cities.as_slice())
            .unwrap_or(&[])
    }
}

/// Source of candidate countries for a city searched without one
pub trait CountryGuess: Send + Sync {
    /// Country codes to try, most likely first
    fn guess_countries(&self, city_name: &str) -> Vec<String>;
}

/// Guesses the configured countries first, then every other gazetteer
/// country in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferredCountries {
    order: Vec<String>,
}

impl PreferredCountries {
    pub fn new(preferred: &[String], gazetteer: &Gazetteer) -> Self {
        let mut order: Vec<String> = Vec::new();
        let codes = preferred
            .iter()
            .map(|code| code.trim().to_uppercase())
            .chain(gazetteer.countries().iter().map(|c| c.code.clone()));
        for code in codes {
            if !order.contains(&code) {
                order.push(code);
            }
        }
        PreferredCountries { order }
    }
}

impl CountryGuess for PreferredCountries {
    fn guess_countries(&self, _city_name: &str) -> Vec<String> {
        self.order.clone()
    }
}

impl<F> CountryGuess for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn guess_countries(&self, city_name: &str) -> Vec<String> {
        self(city_name)
    }
}
