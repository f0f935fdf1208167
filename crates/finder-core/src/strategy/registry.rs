use std::collections::BTreeMap;

use crate::candidate::{Field, FieldKind, FieldValue};
use crate::config::FinderConfig;
use crate::error::{FinderError, Result};
use crate::query::Query;
use crate::{bail_invalid, bail_unsupported};

use super::{EntityType, Strategy, StrategyConfig};

/// Query key turning on scan tracing
pub const DEBUG_KEY: &str = "debug";
/// Query key overriding the strategy bias for one call
pub const BIAS_KEY: &str = "bias";

/// Read-only table of strategy configurations, keyed by entity type.
///
/// Built once and passed to the finder; never mutated while searching.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    entries: BTreeMap<EntityType, StrategyConfig>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl Registry {
    /// Registry with no entity types
    pub fn empty() -> Self {
        Registry {
            entries: BTreeMap::new(),
        }
    }

    /// Registry with every built-in entity type
    pub fn standard() -> Self {
        EntityType::ALL
            .iter()
            .fold(Self::empty(), |registry, entity| {
                registry.with(StrategyConfig::standard(*entity))
            })
    }

    /// Built-in registry with the bias overrides from `config`
    pub fn from_config(config: &FinderConfig) -> Result<Self> {
        let mut registry = Self::standard();
        for (name, bias) in &config.bias {
            let entity: EntityType = name.parse()?;
            registry = registry.with_bias(entity, *bias)?;
        }
        Ok(registry)
    }

    /// Add or replace the configuration for its entity type
    pub fn with(mut self, config: StrategyConfig) -> Self {
        self.entries.insert(config.entity, config);
        self
    }

    /// Override the default bias of a registered entity type
    pub fn with_bias(mut self, entity: EntityType, bias: f64) -> Result<Self> {
        check_bias(bias)?;
        if !self.entries.contains_key(&entity) {
            bail_unsupported!("entity type", entity, self.registered());
        }
        if let Some(config) = self.entries.get_mut(&entity) {
            config.bias = bias;
        }
        Ok(self)
    }

    pub fn get(&self, entity: EntityType) -> Option<&StrategyConfig> {
        self.entries.get(&entity)
    }

    pub fn entity_types(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.entries.keys().copied()
    }

    fn registered(&self) -> String {
        self.entity_types()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Turn raw query fields into a ready-to-scan strategy.
    ///
    /// `debug` and `bias` are control keys. Keys that are not fields of the
    /// entity type are dropped silently, before their values are looked at.
    /// Text given for an integer field is parsed into an integer. Fails when no query field is given,
    /// when the entity type is unknown or not registered, or when the target
    /// field is missing.
    pub fn resolve<K: AsRef<str>>(
        &self,
        entity_type: &str,
        fields: &[(K, FieldValue)],
    ) -> Result<Strategy> {
        let entity: EntityType = entity_type.parse()?;
        let config = match self.entries.get(&entity) {
            Some(config) => config,
            None => bail_unsupported!("entity type", entity, self.registered()),
        };

        let mut debug = false;
        let mut bias = config.bias;
        let mut query_fields = Vec::new();
        for (key, value) in fields {
            match key.as_ref() {
                DEBUG_KEY => debug = parse_flag(value),
                BIAS_KEY => bias = parse_bias(value)?,
                other => query_fields.push((other, value)),
            }
        }
        if query_fields.is_empty() {
            return Err(FinderError::MissingQuery);
        }

        let mut effective: Vec<(Field, FieldValue)> = Vec::new();
        for (key, value) in query_fields {
            let Ok(field) = key.parse::<Field>() else {
                tracing::debug!(entity = %entity, key, "dropping unknown query field");
                continue;
            };
            if !config.is_allowed(field) {
                tracing::debug!(entity = %entity, key, "dropping query field not allowed");
                continue;
            }
            if effective.iter().any(|(seen, _)| *seen == field) {
                continue;
            }
            effective.push((field, typed_value(field, value)?));
        }

        let target_value = match effective.iter().find(|(field, _)| *field == config.target) {
            Some((_, FieldValue::Text(value))) => value.clone(),
            Some((_, other)) => bail_invalid!(config.target.as_str(), other),
            None => {
                return Err(FinderError::MissingField {
                    field: config.target.as_str().to_string(),
                })
            }
        };

        let (primary_field, primary_value) = &effective[0];
        let mut query = Query::new(config.target, target_value, bias)
            .with_debug(debug)
            .with_primary(*primary_field, primary_value);
        for (field, value) in effective {
            if field != config.target {
                query = query.with_filter(field, value);
            }
        }

        Ok(Strategy::new(config.clone(), query))
    }
}

/// Text given for an integer field is parsed; anything else passes through
fn typed_value(field: Field, value: &FieldValue) -> Result<FieldValue> {
    match (field.kind(), value) {
        (FieldKind::Integer, FieldValue::Text(raw)) => field.parse_value(raw),
        _ => Ok(value.clone()),
    }
}

fn check_bias(bias: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&bias) {
        bail_invalid!("bias", bias);
    }
    Ok(())
}

fn parse_flag(value: &FieldValue) -> bool {
    match value {
        FieldValue::Integer(n) => *n != 0,
        FieldValue::Text(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        FieldValue::Null => false,
    }
}

fn parse_bias(value: &FieldValue) -> Result<f64> {
    let bias = match value {
        FieldValue::Integer(n) => *n as f64,
        FieldValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| FinderError::invalid_value("bias", s))?,
        FieldValue::Null => bail_invalid!("bias", "null"),
    };
    check_bias(bias)?;
    Ok(bias)
}
