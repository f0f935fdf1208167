//! Effective search query handed to the match scanner

use crate::candidate::{Field, FieldValue};
use crate::matching::NotFound;

/// A fully resolved query: one target field scored by distance, plus
/// zero or more filter fields used as strict equality constraints.
///
/// The target field is never also a filter field.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub target_field: Field,
    pub target_value: String,
    pub filter_fields: Vec<(Field, FieldValue)>,
    pub bias: f64,
    pub debug: bool,
    primary: (String, String),
}

impl Query {
    /// Create a query on `target_field` with no filters
    pub fn new(target_field: Field, target_value: impl Into<String>, bias: f64) -> Self {
        let target_value = target_value.into();
        Query {
            primary: (target_field.as_str().to_string(), target_value.clone()),
            target_field,
            target_value,
            filter_fields: Vec::new(),
            bias,
            debug: false,
        }
    }

    /// Add a strict equality filter; a filter on the target field is ignored
    pub fn with_filter(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        if field != self.target_field {
            self.filter_fields.push((field, value.into()));
        }
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Override the field reported when nothing matches
    pub fn with_primary(mut self, field: Field, value: &FieldValue) -> Self {
        self.primary = (field.as_str().to_string(), value.to_string());
        self
    }

    /// The first effective query field as `(name, value)`
    pub fn primary(&self) -> (&str, &str) {
        (&self.primary.0, &self.primary.1)
    }

    /// Structured not-found entry for this query
    pub fn not_found(&self) -> NotFound {
        NotFound::new(&self.primary.0, &self.primary.1)
    }

    /// Prefix made of the filter values, in declaration order
    pub fn namespace_prefix(&self) -> String {
        self.filter_fields
            .iter()
            .map(|(_, value)| format!("{} ", value))
            .collect()
    }
}
