use crate::candidate::{Candidate, FieldValue};
use crate::distance::DistanceMetric;
use crate::query::Query;
use crate::text::Normalizer;

use super::Match;

/// Scan a candidate domain for `query`.
///
/// Candidates failing a filter field are skipped. The first candidate whose
/// target value equals the query value exactly wins outright: the scan stops
/// and only that match is returned. Otherwise every candidate whose
/// namespaced weight reaches `query.bias` is kept. The returned list is in
/// visitation order, not ranked.
pub fn scan(
    query: &Query,
    domain: Vec<Candidate>,
    normalizer: Normalizer,
    metric: &dyn DistanceMetric,
) -> Vec<Match<Candidate>> {
    if query.debug {
        tracing::debug!(
            target_field = %query.target_field,
            target_value = %query.target_value,
            bias = query.bias,
            domain_size = domain.len(),
            "scan_start"
        );
    }

    let prefix = query.namespace_prefix();
    let mut matches = Vec::new();

    for candidate in domain {
        if !passes_filters(query, &candidate) {
            continue;
        }

        let Some(value) = target_text(query, &candidate) else {
            continue;
        };

        if value == query.target_value {
            if query.debug {
                tracing::debug!(candidate = ?candidate.id, value, "exact_match");
            }
            return vec![Match::exact(candidate)];
        }

        let weight = weigh(query, &prefix, value, normalizer, metric);
        if query.debug {
            tracing::debug!(candidate = ?candidate.id, value, weight, "inspected");
        }
        if weight >= query.bias {
            matches.push(Match::new(candidate, weight));
        }
    }

    matches
}

/// Strict equality on every filter field. Candidates lacking a filter field
/// are malformed and skipped.
fn passes_filters(query: &Query, candidate: &Candidate) -> bool {
    query
        .filter_fields
        .iter()
        .all(|(field, expected)| match candidate.field(*field) {
            Some(actual) => actual == expected,
            None => {
                tracing::warn!(candidate = ?candidate.id, field = %field, "candidate missing filter field");
                false
            }
        })
}

fn target_text<'c>(query: &Query, candidate: &'c Candidate) -> Option<&'c str> {
    match candidate.field(query.target_field) {
        Some(FieldValue::Text(value)) => Some(value),
        Some(FieldValue::Null) => None,
        Some(FieldValue::Integer(_)) | None => {
            tracing::warn!(
                candidate = ?candidate.id,
                field = %query.target_field,
                "candidate target field missing or not text"
            );
            None
        }
    }
}

fn weigh(
    query: &Query,
    prefix: &str,
    candidate_value: &str,
    normalizer: Normalizer,
    metric: &dyn DistanceMetric,
) -> f64 {
    let target_ns = format!("{}{}", prefix, query.target_value);
    let candidate_ns = format!("{}{}", prefix, candidate_value);
    let raw = metric.distance(&candidate_ns, &target_ns);
    if raw >= query.bias {
        return raw;
    }

    let candidate_norm = normalizer.normalize(candidate_value);
    if candidate_norm.is_empty() {
        return 0.0;
    }
    let target_ns_norm = format!("{}{}", prefix, normalizer.normalize(&query.target_value));
    let candidate_ns_norm = format!("{}{}", prefix, candidate_norm);
    metric.distance(&candidate_ns_norm, &target_ns_norm)
}

/// Weight of a single candidate value against `query`, as the scanner computes it
pub fn namespaced_weight(
    query: &Query,
    candidate_value: &str,
    normalizer: Normalizer,
    metric: &dyn DistanceMetric,
) -> f64 {
    weigh(
        query,
        &query.namespace_prefix(),
        candidate_value,
        normalizer,
        metric,
    )
}
