//! Domain stop words, matched against already normalized (lower-case, ASCII) words

use std::collections::HashSet;
use std::sync::OnceLock;

static POOL_STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static CITY_STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static CODED_STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Generic words found in swimming pool names
pub fn pool_stop_words() -> &'static HashSet<&'static str> {
    POOL_STOP_WORDS.get_or_init(|| {
        [
            "piscina", "piscine", "pool", "swimming", "club", "comunale", "comunali", "centro",
            "sportivo", "polisportivo", "natatorio", "impianto",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Geographic prepositions and articles
pub fn city_stop_words() -> &'static HashSet<&'static str> {
    CITY_STOP_WORDS.get_or_init(|| {
        [
            "di", "d", "de", "del", "dello", "della", "dei", "degli", "delle", "nel", "nell",
            "nello", "nella", "sul", "sull", "sulla", "al", "all", "alla", "in", "la", "le", "lo",
            "l", "sur", "sous", "en", "du", "des", "les",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Legal-form acronyms and generic words shared by team and meeting names
pub fn coded_stop_words() -> &'static HashSet<&'static str> {
    CODED_STOP_WORDS.get_or_init(|| {
        [
            "asd", "ssd", "ssdrl", "srl", "arl", "nuoto", "swimming", "swim", "team", "club",
            "sc", "cn", "rn", "sport", "sportiva", "polisportiva", "associazione",
            "dilettantistica", "societa", "trofeo", "meeting", "memorial", "campionato",
            "campionati", "regionale", "regionali", "di", "del", "della", "dei", "delle",
        ]
        .iter()
        .copied()
        .collect()
    })
}
