//! Text normalization pipelines used before distance scoring
//!
//! Every normalizer is a pure function and idempotent:
//! `normalize(normalize(x)) == normalize(x)`.

mod stopwords;

use serde::{Deserialize, Serialize};

pub use stopwords::{city_stop_words, coded_stop_words, pool_stop_words};

use std::collections::HashSet;

/// Per-entity text cleanup pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalizer {
    /// Lower-case plus accent folding
    #[default]
    Base,
    /// Base plus punctuation removal, for personal names
    PersonName,
    /// Base plus swimming pool stop words
    Pool,
    /// Base plus geographic prepositions and articles
    City,
    /// Shared pipeline for team and meeting names ("A.S.D. Nuoto Carpi")
    CodedName,
}

impl Normalizer {
    /// Apply the pipeline to `text`
    pub fn normalize(&self, text: &str) -> String {
        match self {
            Normalizer::Base => fold_accents(&text.to_lowercase()),
            Normalizer::PersonName => collapse_whitespace(&strip_punctuation(&fold_accents(
                &text.to_lowercase(),
            ))),
            Normalizer::Pool => drop_stop_words(&base_words(text), pool_stop_words()),
            Normalizer::City => drop_stop_words(&base_words(text), city_stop_words()),
            Normalizer::CodedName => {
                let folded = fold_accents(&text.to_lowercase()).replace('.', "");
                drop_stop_words(&strip_punctuation(&folded), coded_stop_words())
            }
        }
    }
}

/// Lower-case, fold accents and turn punctuation into spaces
fn base_words(text: &str) -> String {
    strip_punctuation(&fold_accents(&text.to_lowercase()))
}

/// Replace accented characters with their ASCII equivalents.
///
/// Only lower-case forms are mapped; callers lower-case first.
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}

/// Replace every non-alphanumeric, non-whitespace character with a space
fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn drop_stop_words(text: &str, stop_words: &HashSet<&'static str>) -> String {
    text.split_whitespace()
        .filter(|word| !stop_words.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Normalizer; 5] = [
        Normalizer::Base,
        Normalizer::PersonName,
        Normalizer::Pool,
        Normalizer::City,
        Normalizer::CodedName,
    ];

    #[test]
    fn test_base_folds_accents_and_case() {
        assert_eq!(Normalizer::Base.normalize("Forlì"), "forli");
        assert_eq!(Normalizer::Base.normalize("SÈVERINE Müller"), "severine muller");
    }

    #[test]
    fn test_person_name_strips_punctuation() {
        assert_eq!(
            Normalizer::PersonName.normalize("  D'Angelo,   Niccolò "),
            "d angelo niccolo"
        );
    }

    #[test]
    fn test_pool_drops_stop_words() {
        assert_eq!(
            Normalizer::Pool.normalize("Piscina Comunale \"Ferretti\""),
            "ferretti"
        );
        assert_eq!(Normalizer::Pool.normalize("Club Pool Carpi"), "carpi");
    }

    #[test]
    fn test_city_drops_prepositions() {
        assert_eq!(Normalizer::City.normalize("Reggio nell'Emilia"), "reggio emilia");
        assert_eq!(Normalizer::City.normalize("Castelnuovo di Sotto"), "castelnuovo sotto");
    }

    #[test]
    fn test_coded_name_collapses_acronyms() {
        assert_eq!(Normalizer::CodedName.normalize("A.S.D. Nuoto Carpi"), "carpi");
        assert_eq!(
            Normalizer::CodedName.normalize("CSI Nuoto  Ober Ferrari  ASD"),
            "csi ober ferrari"
        );
        assert_eq!(
            Normalizer::CodedName.normalize("10° Trofeo Città di Riccione"),
            "10 citta riccione"
        );
    }

    #[test]
    fn test_name_made_only_of_stop_words_normalizes_to_empty() {
        assert_eq!(Normalizer::Pool.normalize("Piscina Comunale"), "");
        assert_eq!(Normalizer::CodedName.normalize("A.S.D. Nuoto"), "");
    }

    #[test]
    fn test_all_normalizers_are_idempotent() {
        let samples = [
            "A.S.D. Nuoto Città di Reggio nell'Emilia",
            "  Piscina   Comunale  Ferretti ",
            "Ågé-Ölçü 12°",
            "",
            "...",
            "San Donà di Piave",
            "Trofeo Città del Tricolore - 2024",
        ];
        for normalizer in ALL {
            for sample in samples {
                let once = normalizer.normalize(sample);
                let twice = normalizer.normalize(&once);
                assert_eq!(once, twice, "{normalizer:?} not idempotent on {sample:?}");
            }
        }
    }
}
