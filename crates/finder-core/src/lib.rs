//! Finder Core Library
//!
//! Fuzzy entity resolution: locate the best-matching swimmer, team, pool,
//! meeting or city for a free-text or structured query, using normalized
//! approximate string matching with exact-match short-circuits and ranked
//! alternatives.

pub mod candidate;
pub mod config;
pub mod distance;
pub mod error;
pub mod finder;
pub mod format;
pub mod geo;
pub mod logging;
pub mod matching;
pub mod query;
pub mod store;
pub mod strategy;
pub mod text;

pub use candidate::{Candidate, Field, FieldValue};
pub use error::{FinderError, Result};
pub use finder::Finder;
pub use matching::{FindResult, Match, NotFound};
pub use strategy::{EntityType, Registry};
