//! Candidate stores
//!
//! The engine never owns candidate data. A store only answers a named,
//! recall-oriented lookup ([`CandidateStore::coarse_search`]); the fine
//! filtering, exact-match detection and distance scoring stay in the scanner.

mod memory;
mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::{FinderError, Result};

pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, TableMapping};

/// Named per-entity lookup used to load a strategy's candidate domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    SwimmersByName,
    TeamsByName,
    PoolsByName,
    MeetingsByDescription,
    CitiesByName,
}

impl SearchMethod {
    pub const ALL: [SearchMethod; 5] = [
        SearchMethod::SwimmersByName,
        SearchMethod::TeamsByName,
        SearchMethod::PoolsByName,
        SearchMethod::MeetingsByDescription,
        SearchMethod::CitiesByName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMethod::SwimmersByName => "swimmers_by_name",
            SearchMethod::TeamsByName => "teams_by_name",
            SearchMethod::PoolsByName => "pools_by_name",
            SearchMethod::MeetingsByDescription => "meetings_by_description",
            SearchMethod::CitiesByName => "cities_by_name",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        SearchMethod::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| {
                let supported = SearchMethod::ALL
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                FinderError::unsupported("search method", s, supported)
            })
    }
}

/// Source of candidate domains.
///
/// Implementations may block on I/O; the engine imposes no timeout of its own.
pub trait CandidateStore: Send + Sync {
    /// Return a coarse, recall-oriented subset of the domain for `method`,
    /// narrowed by `target_value`. Must not apply filter or distance logic.
    fn coarse_search(&self, method: SearchMethod, target_value: &str) -> Result<Vec<Candidate>>;
}

/// Words of `target_value` long enough to be useful as substring probes
pub(crate) fn probe_tokens(target_value: &str) -> Vec<String> {
    target_value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 3)
        .map(|token| token.to_lowercase())
        .collect()
}
