//! `finder country` command - resolve a country name or code

use crate::cli::CountryArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    output_by_format, print_json, print_not_found, print_records_header, print_records_match,
};
use finder_core::error::Result;
use finder_core::format::format_weight;
use finder_core::geo::{Country, CountryFinder};
use finder_core::matching::FindResult;

/// Execute the country command
pub fn execute(ctx: &CommandContext, args: &CountryArgs) -> Result<()> {
    let gazetteer = ctx.gazetteer(args.gazetteer.as_ref())?;
    let finder = CountryFinder::from_config(gazetteer, &ctx.config.country);
    let outcome = finder.find_country(&args.name_or_code, args.debug)?;

    output_by_format!(ctx.cli.format,
        json => { print_json(&outcome)?; },
        human => { output_human(&outcome); },
        records => { output_records(&outcome); }
    );
    Ok(())
}

fn output_human(outcome: &FindResult<Country>) {
    match outcome.matches.first() {
        Some(best) => println!(
            "{} {} (weight {})",
            best.candidate.code,
            best.candidate.name,
            format_weight(best.weight)
        ),
        None => {
            if let Some(not_found) = &outcome.errors {
                print_not_found(not_found, false);
            }
        }
    }
}

fn output_records(outcome: &FindResult<Country>) {
    let count = outcome.matches.len().to_string();
    print_records_header("country", &[("matches", count.as_str())]);
    for (i, m) in outcome.matches.iter().enumerate() {
        let fields = [
            ("code", m.candidate.code.clone()),
            ("name", m.candidate.name.clone()),
        ];
        print_records_match(i + 1, m.weight, &fields);
    }
    if let Some(not_found) = &outcome.errors {
        print_not_found(not_found, true);
    }
}
