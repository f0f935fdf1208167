//! Result rendering helpers

use finder_core::candidate::{Candidate, FieldValue};
use finder_core::error::Result;
use finder_core::format::{format_weight, record_value, RECORDS_VERSION};
use finder_core::matching::NotFound;
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a Records format header
///
/// # Examples
/// ```ignore
/// print_records_header("find", &[("entity", "team"), ("matches", "2")]);
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, &str)]) {
    let mut parts = vec![
        format!("H finder={} records=1", RECORDS_VERSION),
        format!("mode={}", mode),
    ];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, record_value(value)));
    }

    println!("{}", parts.join(" "));
}

/// Print one ranked match line: `M <rank> weight=<w> <fields>`
pub fn print_records_match(rank: usize, weight: f64, fields: &[(&str, String)]) {
    let mut line = format!("M {} weight={}", rank, format_weight(weight));
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, record_value(value)));
    }
    println!("{}", line);
}

/// Print the not-found diagnostic as an `E` record or a human sentence
pub fn print_not_found(not_found: &NotFound, records: bool) {
    if records {
        println!(
            "E {}={}",
            not_found.field,
            record_value(&not_found.value)
        );
    } else {
        println!("No match for {}=\"{}\"", not_found.field, not_found.value);
    }
}

/// Candidate id followed by its fields, in column order
pub fn describe_candidate(candidate: &Candidate) -> Vec<(&str, String)> {
    let mut fields = Vec::with_capacity(candidate.fields.len() + 1);
    if let Some(id) = candidate.id {
        fields.push(("id", id.to_string()));
    }
    for (name, value) in &candidate.fields {
        if let FieldValue::Null = value {
            continue;
        }
        fields.push((name.as_str(), value.to_string()));
    }
    fields
}
