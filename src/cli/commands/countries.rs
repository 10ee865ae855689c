//! Countries command implementation
//!
//! Lists the static country registry used to resolve ISO 3166 codes and
//! currencies for extracted records, in human or JSON form.

use colored::*;
use serde_json::json;

use super::shared::PipelineStats;
use crate::app::services::country_registry::CountryRegistry;
use crate::cli::args::{CountriesArgs, OutputFormat};
use crate::Result;

/// Countries command runner
pub fn run_countries(args: CountriesArgs) -> Result<PipelineStats> {
    let registry = CountryRegistry::new();

    match args.format {
        OutputFormat::Human => print_human(&registry),
        OutputFormat::Json => print_json(&registry)?,
    }

    Ok(PipelineStats::default())
}

fn print_human(registry: &CountryRegistry) {
    println!("{}", "Country registry".bold());
    println!("{:<30} {:<6} {}", "Country", "Code", "Currency");
    println!("{}", "-".repeat(46));

    for (name, code) in registry.entries() {
        let currency = registry.currency(code).unwrap_or("-");
        println!("{:<30} {:<6} {}", name, code, currency);
    }

    println!("\n{} countries registered", registry.len());
}

fn print_json(registry: &CountryRegistry) -> Result<()> {
    let entries: Vec<_> = registry
        .entries()
        .iter()
        .map(|(name, code)| {
            json!({
                "country": name,
                "code": code,
                "currency": registry.currency(code),
            })
        })
        .collect();

    let serialized = serde_json::to_string_pretty(&entries)?;
    println!("{}", serialized);
    Ok(())
}
