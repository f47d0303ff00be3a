//! Implementation of the `vocative check` command.

use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use vocative::NameDictionary;

use crate::output::DictionaryDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for check results.
#[derive(Debug, Serialize)]
struct CheckJson {
    valid: bool,
    names: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let result = NameDictionary::polish();

    if args.json {
        let output = match &result {
            Ok(dictionary) => CheckJson {
                valid: true,
                names: dictionary.len(),
                error: None,
            },
            Err(e) => CheckJson {
                valid: false,
                names: 0,
                error: Some(e.to_string()),
            },
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    }

    match result {
        Ok(dictionary) => {
            if !args.json {
                println!(
                    "{} {} names, no duplicates",
                    "ok:".if_supports_color(Stream::Stdout, |text| text.green()),
                    dictionary.len()
                );
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if !args.json {
                eprintln!("{:?}", Report::new(DictionaryDiagnostic::from(e)));
            }
            Ok(exitcode::DATAERR)
        }
    }
}
