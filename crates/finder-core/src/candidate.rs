//! Candidate records and the closed set of searchable fields

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};

/// A single field value as stored on a candidate or supplied in a query.
///
/// Equality is strict: `Text("3")` never equals `Integer(3)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Null,
}

impl FieldValue {
    /// Borrow the text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

/// Storage kind of a field, used to parse textual input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

/// Known field identifiers across all searchable entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CompleteName,
    FirstName,
    LastName,
    YearOfBirth,
    GenderTypeId,
    Name,
    EditableName,
    CityId,
    NickName,
    PoolTypeId,
    Description,
    SeasonId,
    HeaderYear,
    CountryCode,
    Area,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::CompleteName,
        Field::FirstName,
        Field::LastName,
        Field::YearOfBirth,
        Field::GenderTypeId,
        Field::Name,
        Field::EditableName,
        Field::CityId,
        Field::NickName,
        Field::PoolTypeId,
        Field::Description,
        Field::SeasonId,
        Field::HeaderYear,
        Field::CountryCode,
        Field::Area,
    ];

    /// Column / query key for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CompleteName => "complete_name",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::YearOfBirth => "year_of_birth",
            Field::GenderTypeId => "gender_type_id",
            Field::Name => "name",
            Field::EditableName => "editable_name",
            Field::CityId => "city_id",
            Field::NickName => "nick_name",
            Field::PoolTypeId => "pool_type_id",
            Field::Description => "description",
            Field::SeasonId => "season_id",
            Field::HeaderYear => "header_year",
            Field::CountryCode => "country_code",
            Field::Area => "area",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::YearOfBirth
            | Field::GenderTypeId
            | Field::CityId
            | Field::PoolTypeId
            | Field::SeasonId => FieldKind::Integer,
            _ => FieldKind::Text,
        }
    }

    /// Parse a raw textual value according to this field's kind
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue> {
        match self.kind() {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| FinderError::invalid_value(self.as_str(), raw)),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FinderError::invalid_value("field", s))
    }
}

/// One record of a candidate domain.
///
/// Identity is whatever the store assigned (`id`); the engine never creates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Candidate {
    pub fn new(id: i64) -> Self {
        Candidate {
            id: Some(id),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Look up a known field
    pub fn field(&self, field: Field) -> Option<&FieldValue> {
        self.get(field.as_str())
    }
}
