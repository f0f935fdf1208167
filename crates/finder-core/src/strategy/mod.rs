//! Per-entity search strategies
//!
//! Each entity type has an immutable [`StrategyConfig`] describing which field
//! is scored, which fields may narrow the domain, how the domain is loaded,
//! the default bias and the normalizer. A [`Registry`] holds the configs and
//! turns raw query fields into a ready-to-scan [`Strategy`].

mod registry;
mod variants;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, Field};
use crate::distance::DistanceMetric;
use crate::error::{FinderError, Result};
use crate::matching::{self, Match};
use crate::query::Query;
use crate::store::{CandidateStore, SearchMethod};
use crate::text::Normalizer;

pub use registry::{Registry, BIAS_KEY, DEBUG_KEY};
pub use variants::{CITY_BIAS, MEETING_BIAS, POOL_BIAS, SWIMMER_BIAS, TEAM_BIAS};

/// Searchable entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Swimmer,
    Team,
    Pool,
    Meeting,
    City,
}

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        EntityType::Swimmer,
        EntityType::Team,
        EntityType::Pool,
        EntityType::Meeting,
        EntityType::City,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Swimmer => "swimmer",
            EntityType::Team => "team",
            EntityType::Pool => "pool",
            EntityType::Meeting => "meeting",
            EntityType::City => "city",
        }
    }

    fn supported() -> String {
        EntityType::ALL
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "swimmer" => Ok(EntityType::Swimmer),
            "team" => Ok(EntityType::Team),
            "pool" | "swimming_pool" => Ok(EntityType::Pool),
            "meeting" => Ok(EntityType::Meeting),
            "city" => Ok(EntityType::City),
            _ => Err(FinderError::unsupported(
                "entity type",
                s,
                EntityType::supported(),
            )),
        }
    }
}

/// Immutable per-entity search descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyConfig {
    pub entity: EntityType,
    /// Field scored by distance
    pub target: Field,
    /// Fields accepted as strict equality filters
    pub filters: Vec<Field>,
    /// Store lookup used to load the domain
    pub search_method: SearchMethod,
    pub bias: f64,
    pub normalizer: Normalizer,
}

impl StrategyConfig {
    /// Built-in configuration for `entity`
    pub fn standard(entity: EntityType) -> Self {
        variants::standard(entity)
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    pub fn default_bias(&self) -> f64 {
        self.bias
    }

    /// Target field followed by the filter fields
    pub fn allowed_fields(&self) -> impl Iterator<Item = Field> + '_ {
        std::iter::once(self.target).chain(self.filters.iter().copied())
    }

    pub fn is_allowed(&self, field: Field) -> bool {
        self.allowed_fields().any(|allowed| allowed == field)
    }

    pub fn domain_loader_name(&self) -> &'static str {
        self.search_method.as_str()
    }
}

/// A strategy bound to an effective query, ready to scan
#[derive(Debug, Clone)]
pub struct Strategy {
    config: StrategyConfig,
    query: Query,
}

impl Strategy {
    pub fn new(config: StrategyConfig, query: Query) -> Self {
        Strategy { config, query }
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn entity_type(&self) -> EntityType {
        self.config.entity
    }

    /// Load the coarse domain and run the match scanner over it.
    ///
    /// The returned matches are unranked.
    pub fn scan(
        &self,
        store: &dyn CandidateStore,
        metric: &dyn DistanceMetric,
    ) -> Result<Vec<Match<Candidate>>> {
        let domain = store.coarse_search(self.config.search_method, &self.query.target_value)?;
        Ok(matching::scan(
            &self.query,
            domain,
            self.config.normalizer,
            metric,
        ))
    }
}
