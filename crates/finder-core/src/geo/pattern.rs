//! Tokenized city-name patterns
//!
//! A free-text city name becomes a set of word fragments that must all occur
//! in a dictionary key, in any order. Leading honorifics ("San", "Saint")
//! and the locale's articles and conjunctions are dropped first, so
//! "Reggio nell Emilia" matches the key "Reggio Emilia".

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};
use crate::text::Normalizer;

const HONORIFICS: [&str; 7] = ["saint", "sainte", "st", "san", "sant", "santa", "santo"];

/// Language whose grammatical words are ignored when tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Italian,
}

impl Locale {
    /// Articles, articulated prepositions and conjunctions of the locale
    pub fn stop_words(&self) -> &'static HashSet<&'static str> {
        match self {
            Locale::Italian => italian_stop_words(),
        }
    }
}

fn italian_stop_words() -> &'static HashSet<&'static str> {
    static WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| {
        [
            "e", "ed", "o", "od", "il", "lo", "la", "i", "gli", "le", "l", "un", "uno", "una",
            "di", "d", "del", "dello", "della", "dell", "dei", "degli", "delle", "a", "al",
            "allo", "alla", "all", "ai", "agli", "alle", "da", "dal", "dallo", "dalla", "dall",
            "in", "nel", "nello", "nella", "nell", "nei", "negli", "nelle", "su", "sul", "sullo",
            "sulla", "sull", "sui", "sugli", "sulle", "sopra", "sotto",
        ]
        .into_iter()
        .collect()
    })
}

/// Compiled tokenized pattern for one city name
#[derive(Debug, Clone)]
pub struct TokenizedPattern {
    tokens: Vec<String>,
    fragments: Vec<Regex>,
}

impl TokenizedPattern {
    /// Build the pattern for `city_name`, or `None` when no token survives
    pub fn new(city_name: &str, locale: Locale) -> Result<Option<Self>> {
        let tokens = tokenize(city_name, locale);
        if tokens.is_empty() {
            return Ok(None);
        }

        let fragments = if tokens.len() == 1 {
            vec![compile(&anchored(&tokens[0], locale))?]
        } else {
            tokens
                .iter()
                .map(|token| compile(&format!(r"(?i)\b{}\b", regex::escape(token))))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Some(TokenizedPattern { tokens, fragments }))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when every fragment occurs in the accent-folded `key`
    pub fn is_match(&self, key: &str) -> bool {
        let folded = Normalizer::Base.normalize(key);
        self.fragments.iter().all(|fragment| fragment.is_match(&folded))
    }
}

/// Accent-folded, lower-cased tokens of `city_name` without leading
/// honorifics or locale stop words
pub fn tokenize(city_name: &str, locale: Locale) -> Vec<String> {
    let base = Normalizer::Base.normalize(city_name);
    let words: Vec<&str> = base
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    let stop_words = locale.stop_words();
    words
        .into_iter()
        .skip_while(|word| HONORIFICS.contains(word))
        .filter(|word| !stop_words.contains(*word))
        .map(|word| word.to_string())
        .collect()
}

/// Whole-key pattern for a single token, allowing leading honorifics and
/// articles before it
fn anchored(token: &str, locale: Locale) -> String {
    let mut prefixes: Vec<&str> = HONORIFICS.to_vec();
    let mut articles: Vec<&str> = locale.stop_words().iter().copied().collect();
    articles.sort_unstable();
    prefixes.extend(articles);
    format!(
        r"(?i)^(?:(?:{})[\s\-'’]+)*{}$",
        prefixes.join("|"),
        regex::escape(token)
    )
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| FinderError::invalid_value("city pattern", e))
}
