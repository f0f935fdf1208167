//! `finder city` command - resolve a city against the gazetteer

use tracing::debug;

use crate::cli::CityArgs;
use crate::commands::dispatch::{check_bias, CommandContext};
use crate::commands::format::{
    output_by_format, print_json, print_not_found, print_records_header, print_records_match,
};
use finder_core::error::Result;
use finder_core::format::format_weight;
use finder_core::geo::{City, CityFinder};
use finder_core::matching::FindResult;

/// Execute the city command
pub fn execute(ctx: &CommandContext, args: &CityArgs) -> Result<()> {
    let gazetteer = ctx.gazetteer(args.gazetteer.as_ref())?;
    let mut finder = CityFinder::from_config(gazetteer, &ctx.config.city);
    if let Some(bias) = check_bias(args.bias)? {
        finder = finder.with_bias(bias);
    }

    let outcome = finder.find_city(args.country.as_deref(), &args.name, args.debug)?;
    debug!(
        matches = outcome.matches.len(),
        elapsed = ?ctx.start.elapsed(),
        "find_city"
    );

    output_by_format!(ctx.cli.format,
        json => { print_json(&outcome)?; },
        human => { output_human(&outcome, ctx.cli.quiet); },
        records => { output_records(&outcome); }
    );
    Ok(())
}

fn describe(city: &City) -> String {
    match &city.area {
        Some(area) => format!("{} ({}) [{}]", city.name, area, city.country_code),
        None => format!("{} [{}]", city.name, city.country_code),
    }
}

fn output_human(outcome: &FindResult<City>, quiet: bool) {
    let Some(best) = outcome.matches.first() else {
        if let Some(not_found) = &outcome.errors {
            print_not_found(not_found, false);
        }
        return;
    };

    println!("{} (weight {})", describe(&best.candidate), format_weight(best.weight));
    if quiet {
        return;
    }
    for m in outcome.matches.iter().skip(1) {
        println!("  {} (weight {})", describe(&m.candidate), format_weight(m.weight));
    }
}

fn output_records(outcome: &FindResult<City>) {
    let count = outcome.matches.len().to_string();
    print_records_header("city", &[("matches", count.as_str())]);
    for (i, m) in outcome.matches.iter().enumerate() {
        let city = &m.candidate;
        let mut fields = vec![
            ("country", city.country_code.clone()),
            ("key", city.key.clone()),
            ("name", city.name.clone()),
        ];
        if let Some(area) = &city.area {
            fields.push(("area", area.clone()));
        }
        print_records_match(i + 1, m.weight, &fields);
    }
    if let Some(not_found) = &outcome.errors {
        print_not_found(not_found, true);
    }
}
