use std::sync::Arc;

use crate::config::CityConfig;
use crate::distance::{DistanceMetric, JaroWinkler};
use crate::error::{FinderError, Result};
use crate::matching::{rank, FindResult, Match, NotFound};
use crate::strategy::CITY_BIAS;
use crate::text::Normalizer;

use super::pattern::{Locale, TokenizedPattern};
use super::{City, CountryGuess, Gazetteer, PreferredCountries};

/// Field name reported when no city matches
pub const CITY_NAME_FIELD: &str = "city_name";

/// Resolves free-text city names against a [`Gazetteer`]
#[derive(Clone)]
pub struct CityFinder {
    gazetteer: Arc<Gazetteer>,
    guesser: Arc<dyn CountryGuess>,
    metric: Arc<dyn DistanceMetric>,
    bias: f64,
    locale: Locale,
}

impl std::fmt::Debug for CityFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CityFinder")
            .field("bias", &self.bias)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl CityFinder {
    /// Finder preferring Italy when no country is given
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self::from_config(gazetteer, &CityConfig::default())
    }

    pub fn from_config(gazetteer: Arc<Gazetteer>, config: &CityConfig) -> Self {
        let guesser = PreferredCountries::new(&config.preferred_countries, &gazetteer);
        CityFinder {
            gazetteer,
            guesser: Arc::new(guesser),
            metric: Arc::new(JaroWinkler),
            bias: config.bias,
            locale: Locale::default(),
        }
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_guesser(mut self, guesser: impl CountryGuess + 'static) -> Self {
        self.guesser = Arc::new(guesser);
        self
    }

    pub fn with_metric(mut self, metric: impl DistanceMetric + 'static) -> Self {
        self.metric = Arc::new(metric);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Find the city best matching `city_name`.
    ///
    /// With a `country` only its cities are searched; an unknown country
    /// simply yields no match. Without one, the guessed countries are tried
    /// in order and the first one producing any match wins.
    #[tracing::instrument(skip(self, debug))]
    pub fn find_city(
        &self,
        country: Option<&str>,
        city_name: &str,
        debug: bool,
    ) -> Result<FindResult<City>> {
        if city_name.trim().is_empty() {
            return Err(FinderError::MissingField {
                field: CITY_NAME_FIELD.to_string(),
            });
        }

        let pattern = TokenizedPattern::new(city_name, self.locale)?;
        if debug {
            tracing::debug!(
                tokens = ?pattern.as_ref().map(|p| p.tokens().to_vec()),
                "city pattern"
            );
        }

        let countries = match country {
            Some(code) => vec![code.to_string()],
            None => self.guesser.guess_countries(city_name),
        };

        for code in &countries {
            let matches = self.scan_country(code, pattern.as_ref(), city_name, debug);
            if !matches.is_empty() {
                return Ok(FindResult::from_ranked(rank(matches), || {
                    NotFound::new(CITY_NAME_FIELD, city_name)
                }));
            }
        }

        Ok(FindResult::from_ranked(Vec::new(), || {
            NotFound::new(CITY_NAME_FIELD, city_name)
        }))
    }

    fn scan_country(
        &self,
        code: &str,
        pattern: Option<&TokenizedPattern>,
        city_name: &str,
        debug: bool,
    ) -> Vec<Match<City>> {
        let cities = self.gazetteer.cities(code);
        if debug {
            tracing::debug!(country = code, domain_size = cities.len(), "scan_start");
        }

        if let Some(pattern) = pattern {
            if let Some(city) = cities.iter().find(|city| pattern.is_match(&city.key)) {
                if debug {
                    tracing::debug!(country = code, key = %city.key, "pattern_match");
                }
                return vec![Match::exact(city.clone())];
            }
        }

        let wanted = Normalizer::Base.normalize(city_name);
        cities
            .iter()
            .filter_map(|city| {
                let weight = self.weigh(city, &wanted);
                if debug {
                    tracing::debug!(country = code, key = %city.key, weight, "inspected");
                }
                (weight >= self.bias).then(|| Match::new(city.clone(), weight))
            })
            .collect()
    }

    /// Score on the display name, falling back to the dictionary key
    fn weigh(&self, city: &City, wanted: &str) -> f64 {
        let by_name = self
            .metric
            .distance(&Normalizer::Base.normalize(&city.name), wanted);
        if by_name >= self.bias {
            return by_name;
        }
        let by_key = self
            .metric
            .distance(&Normalizer::Base.normalize(&city.key), wanted);
        by_name.max(by_key)
    }
}
