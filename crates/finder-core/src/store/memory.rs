//! In-memory candidate store, used by tests and JSON fixtures

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::candidate::Candidate;
use crate::error::{FinderError, Result};

use super::{CandidateStore, SearchMethod};

/// Candidate domains held in memory, keyed by search method.
///
/// There is no index: `coarse_search` returns the whole domain for the
/// method, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    domains: HashMap<SearchMethod, Vec<Candidate>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the domain for `method`
    pub fn with_domain(mut self, method: SearchMethod, candidates: Vec<Candidate>) -> Self {
        self.domains.insert(method, candidates);
        self
    }

    /// Append a single candidate to the domain for `method`
    pub fn insert(&mut self, method: SearchMethod, candidate: Candidate) {
        self.domains.entry(method).or_default().push(candidate);
    }

    /// Parse a JSON fixture of the form `{"teams_by_name": [{"id": 1, "name": "..."}]}`
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<Candidate>> = serde_json::from_str(content)?;
        let mut store = MemoryStore::new();
        for (method, candidates) in raw {
            let method: SearchMethod = method.parse()?;
            store.domains.insert(method, candidates);
        }
        Ok(store)
    }

    /// Load a JSON fixture from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FinderError::not_found(
                "candidate file",
                path.display().to_string(),
            ));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn len(&self, method: SearchMethod) -> usize {
        self.domains.get(&method).map_or(0, Vec::len)
    }
}

impl CandidateStore for MemoryStore {
    fn coarse_search(&self, method: SearchMethod, _target_value: &str) -> Result<Vec<Candidate>> {
        Ok(self.domains.get(&method).cloned().unwrap_or_default())
    }
}
