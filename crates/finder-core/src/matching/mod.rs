//! Match scanning and ranking
//!
//! A search always ends in a [`FindResult`]: a possibly empty ranked list of
//! matches, the best candidate (if any) and a structured not-found entry when
//! the list is empty. "Not found" is data, never an error.

mod ranker;
mod scanner;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub use ranker::rank;
pub use scanner::{namespaced_weight, scan};

/// A candidate paired with its similarity weight in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<T> {
    pub candidate: T,
    pub weight: f64,
}

impl<T> Match<T> {
    pub fn new(candidate: T, weight: f64) -> Self {
        Match { candidate, weight }
    }

    /// Exact hit found by a short-circuit rule
    pub fn exact(candidate: T) -> Self {
        Match {
            candidate,
            weight: 1.0,
        }
    }
}

/// Structured diagnostic recorded when a search yields no match.
///
/// Serializes as `{"<field>": "<value>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub field: String,
    pub value: String,
}

impl NotFound {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        NotFound {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl Serialize for NotFound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.value)?;
        map.end()
    }
}

/// Outcome of a search: best candidate, ranked alternatives, diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindResult<T> {
    pub result: Option<T>,
    pub matches: Vec<Match<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<NotFound>,
}

impl<T: Clone> FindResult<T> {
    /// Build the outcome from an already ranked match list
    pub fn from_ranked(matches: Vec<Match<T>>, not_found: impl FnOnce() -> NotFound) -> Self {
        match matches.first() {
            Some(best) => FindResult {
                result: Some(best.candidate.clone()),
                matches,
                errors: None,
            },
            None => FindResult {
                result: None,
                matches,
                errors: Some(not_found()),
            },
        }
    }

    /// Weight of the best match, if any
    pub fn best_weight(&self) -> Option<f64> {
        self.matches.first().map(|m| m.weight)
    }

    pub fn is_found(&self) -> bool {
        self.result.is_some()
    }
}
