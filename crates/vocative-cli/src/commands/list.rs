//! Implementation of the `vocative list` command.

use clap::Args;
use miette::IntoDiagnostic;
use serde::Serialize;
use vocative::{Gender, NameDictionary, NameEntry};

use crate::output::table::format_dictionary_table;
use crate::output::DictionaryDiagnostic;

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show names of this gender (M, F or U)
    #[arg(long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for a dictionary entry.
#[derive(Debug, Serialize)]
struct EntryJson<'a> {
    name: &'a str,
    vocative: &'a str,
    gender: Gender,
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::from_code(s).ok_or_else(|| format!("invalid gender '{}': expected M, F or U", s))
}

/// Run the list command.
pub fn run_list(args: ListArgs) -> miette::Result<i32> {
    let dictionary = NameDictionary::polish().map_err(DictionaryDiagnostic::from)?;
    let entries: Vec<&NameEntry> = dictionary
        .entries()
        .filter(|entry| args.gender.map_or(true, |gender| entry.gender == gender))
        .collect();

    if args.json {
        let json_data: Vec<EntryJson<'_>> = entries
            .iter()
            .map(|entry| EntryJson {
                name: &entry.name,
                vocative: &entry.vocative,
                gender: entry.gender,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json_data).into_diagnostic()?
        );
    } else {
        println!("{}", format_dictionary_table(entries.iter().copied()));
        println!("\n{} of {} names", entries.len(), dictionary.len());
    }

    Ok(exitcode::OK)
}
