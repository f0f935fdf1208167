//! Top-level entity search command

use std::sync::Arc;

use crate::candidate::{Candidate, FieldValue};
use crate::distance::{DistanceMetric, JaroWinkler};
use crate::error::{FinderError, Result};
use crate::matching::{rank, FindResult};
use crate::store::CandidateStore;
use crate::strategy::Registry;
use crate::trace_time;

/// Resolves free-form query fields to the best matching stored entity.
///
/// Holds only read-only collaborators, so one finder can serve concurrent
/// searches.
#[derive(Clone)]
pub struct Finder {
    registry: Arc<Registry>,
    store: Arc<dyn CandidateStore>,
    metric: Arc<dyn DistanceMetric>,
}

impl std::fmt::Debug for Finder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Finder")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Finder`]
#[derive(Default)]
pub struct FinderBuilder {
    registry: Option<Registry>,
    store: Option<Arc<dyn CandidateStore>>,
    metric: Option<Arc<dyn DistanceMetric>>,
}

impl FinderBuilder {
    /// Strategy registry; defaults to [`Registry::standard`]
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Candidate store; required
    pub fn store(mut self, store: impl CandidateStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn shared_store(mut self, store: Arc<dyn CandidateStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Distance metric; defaults to Jaro-Winkler
    pub fn metric(mut self, metric: impl DistanceMetric + 'static) -> Self {
        self.metric = Some(Arc::new(metric));
        self
    }

    pub fn build(self) -> Result<Finder> {
        let store = self.store.ok_or(FinderError::MissingStore)?;
        Ok(Finder {
            registry: Arc::new(self.registry.unwrap_or_default()),
            store,
            metric: self.metric.unwrap_or_else(|| Arc::new(JaroWinkler)),
        })
    }
}

impl Finder {
    pub fn builder() -> FinderBuilder {
        FinderBuilder::default()
    }

    /// Search `entity_type` for the candidate best matching `fields`.
    ///
    /// Returns a [`FindResult`] whose `result` is the top ranked match. An
    /// empty search is reported through `errors`, keyed on the first
    /// effective query field. Malformed queries fail with an invalid
    /// argument error.
    #[tracing::instrument(skip(self, fields), fields(entity = %entity_type))]
    pub fn find<K: AsRef<str>>(
        &self,
        entity_type: &str,
        fields: &[(K, FieldValue)],
    ) -> Result<FindResult<Candidate>> {
        let start = std::time::Instant::now();
        let strategy = self.registry.resolve(entity_type, fields)?;
        let matches = strategy.scan(self.store.as_ref(), self.metric.as_ref())?;
        let ranked = rank(matches);
        trace_time!(start, "find");

        let query = strategy.query();
        let outcome = FindResult::from_ranked(ranked, || query.not_found());
        tracing::debug!(
            matches = outcome.matches.len(),
            best = ?outcome.best_weight(),
            "find complete"
        );
        Ok(outcome)
    }
}
