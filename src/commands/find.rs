//! `finder find` command - resolve a stored entity
//!
//! - `finder find <entity> key=value...` - query fields, parsed by field kind
//! - `--db` / `--candidates` - candidate source (falls back to `[store]` config)
//! - `--bias`, `--debug` - per-call strategy overrides

use std::sync::Arc;

use tracing::debug;

use crate::cli::FindArgs;
use crate::commands::dispatch::{check_bias, CommandContext};
use crate::commands::format::{
    describe_candidate, output_by_format, print_json, print_not_found, print_records_header,
    print_records_match,
};
use finder_core::candidate::{Candidate, FieldValue};
use finder_core::config::FinderConfig;
use finder_core::error::Result;
use finder_core::format::format_weight;
use finder_core::matching::FindResult;
use finder_core::store::{CandidateStore, MemoryStore, SqliteStore};
use finder_core::strategy::{BIAS_KEY, DEBUG_KEY};
use finder_core::{Finder, Registry};

/// Execute the find command
pub fn execute(ctx: &CommandContext, args: &FindArgs) -> Result<()> {
    let registry = Registry::from_config(&ctx.config)?;
    let fields = query_fields(args)?;

    let mut builder = Finder::builder().registry(registry);
    if let Some(store) = open_store(args, &ctx.config)? {
        builder = builder.shared_store(store);
    }
    let finder = builder.build()?;

    let outcome = finder.find(&args.entity, &fields)?;
    debug!(
        entity = %args.entity,
        matches = outcome.matches.len(),
        elapsed = ?ctx.start.elapsed(),
        "find"
    );

    output_by_format!(ctx.cli.format,
        json => { print_json(&outcome)?; },
        human => { output_human(&outcome, ctx.cli.quiet); },
        records => { output_records(&outcome, &args.entity); }
    );
    Ok(())
}

/// Raw `key=value` pairs as text, plus the flag overrides.
///
/// The registry drops keys the entity does not accept and types the rest.
fn query_fields(args: &FindArgs) -> Result<Vec<(String, FieldValue)>> {
    let mut fields: Vec<(String, FieldValue)> = args
        .fields
        .iter()
        .map(|(key, raw)| (key.clone(), FieldValue::Text(raw.clone())))
        .collect();
    if let Some(bias) = check_bias(args.bias)? {
        fields.push((BIAS_KEY.to_string(), FieldValue::Text(bias.to_string())));
    }
    if args.debug {
        fields.push((DEBUG_KEY.to_string(), FieldValue::from("true")));
    }
    Ok(fields)
}

/// Candidate store named on the command line, else in the configuration
fn open_store(args: &FindArgs, config: &FinderConfig) -> Result<Option<Arc<dyn CandidateStore>>> {
    let database = args.db.as_ref().or(if args.candidates.is_none() {
        config.store.database.as_ref()
    } else {
        None
    });
    if let Some(path) = database {
        let mut store = SqliteStore::open(path)?;
        for (method, mapping) in config.table_overrides()? {
            store = store.with_table(method, mapping);
        }
        let store: Arc<dyn CandidateStore> = Arc::new(store);
        return Ok(Some(store));
    }

    let candidates = args
        .candidates
        .as_ref()
        .or(config.store.candidates.as_ref());
    match candidates {
        Some(path) => {
            let store: Arc<dyn CandidateStore> = Arc::new(MemoryStore::load(path)?);
            Ok(Some(store))
        }
        None => Ok(None),
    }
}

fn output_human(outcome: &FindResult<Candidate>, quiet: bool) {
    let Some(best) = outcome.matches.first() else {
        if let Some(not_found) = &outcome.errors {
            print_not_found(not_found, false);
        }
        return;
    };

    println!(
        "{} (weight {})",
        summary(&best.candidate),
        format_weight(best.weight)
    );
    if quiet || outcome.matches.len() < 2 {
        return;
    }
    println!();
    println!("Alternatives:");
    for m in outcome.matches.iter().skip(1) {
        println!("  {} (weight {})", summary(&m.candidate), format_weight(m.weight));
    }
}

fn summary(candidate: &Candidate) -> String {
    describe_candidate(candidate)
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn output_records(outcome: &FindResult<Candidate>, entity: &str) {
    let count = outcome.matches.len().to_string();
    print_records_header("find", &[("entity", entity), ("matches", count.as_str())]);
    for (i, m) in outcome.matches.iter().enumerate() {
        print_records_match(i + 1, m.weight, &describe_candidate(&m.candidate));
    }
    if let Some(not_found) = &outcome.errors {
        print_not_found(not_found, true);
    }
}
