use std::sync::Arc;

use crate::config::CountryConfig;
use crate::distance::{DistanceMetric, JaroWinkler};
use crate::error::{FinderError, Result};
use crate::matching::{rank, FindResult, Match, NotFound};
use crate::text::Normalizer;

use super::{Country, Gazetteer};

/// Field name reported when no country matches
pub const COUNTRY_FIELD: &str = "country";

/// Resolves a country code or free-text country name against a [`Gazetteer`]
#[derive(Clone)]
pub struct CountryFinder {
    gazetteer: Arc<Gazetteer>,
    metric: Arc<dyn DistanceMetric>,
    bias: f64,
}

impl std::fmt::Debug for CountryFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryFinder")
            .field("bias", &self.bias)
            .finish_non_exhaustive()
    }
}

impl CountryFinder {
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self::from_config(gazetteer, &CountryConfig::default())
    }

    pub fn from_config(gazetteer: Arc<Gazetteer>, config: &CountryConfig) -> Self {
        CountryFinder {
            gazetteer,
            metric: Arc::new(JaroWinkler),
            bias: config.bias,
        }
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_metric(mut self, metric: impl DistanceMetric + 'static) -> Self {
        self.metric = Arc::new(metric);
        self
    }

    /// Find the country whose code or name best matches `name_or_code`.
    ///
    /// A code or name equal to the query (ignoring case and accents) wins
    /// outright with weight 1.0.
    #[tracing::instrument(skip(self, debug))]
    pub fn find_country(&self, name_or_code: &str, debug: bool) -> Result<FindResult<Country>> {
        let wanted = name_or_code.trim();
        if wanted.is_empty() {
            return Err(FinderError::MissingField {
                field: COUNTRY_FIELD.to_string(),
            });
        }
        let not_found = || NotFound::new(COUNTRY_FIELD, name_or_code);

        let wanted_norm = Normalizer::Base.normalize(wanted);
        let countries = self.gazetteer.countries();
        let exact = countries.iter().find(|country| {
            country.code.eq_ignore_ascii_case(wanted)
                || Normalizer::Base.normalize(&country.name) == wanted_norm
        });
        if let Some(country) = exact {
            if debug {
                tracing::debug!(code = %country.code, "exact_match");
            }
            return Ok(FindResult::from_ranked(
                vec![Match::exact(country.clone())],
                not_found,
            ));
        }

        let matches = countries
            .iter()
            .filter_map(|country| {
                let weight = self
                    .metric
                    .distance(&Normalizer::Base.normalize(&country.name), &wanted_norm);
                if debug {
                    tracing::debug!(code = %country.code, weight, "inspected");
                }
                (weight >= self.bias).then(|| Match::new(country.clone(), weight))
            })
            .collect();

        Ok(FindResult::from_ranked(rank(matches), not_found))
    }
}
