//! Implementation of the `vocative greet` command.

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde_json::json;
use vocative::{GreetingRequest, Language, NameDictionary, VocativeService};

use crate::output::DictionaryDiagnostic;

/// Number of "did you mean" candidates shown for unknown names.
const MAX_SUGGESTIONS: usize = 3;

/// Arguments for the greet command.
#[derive(Debug, clap::Args)]
pub struct GreetArgs {
    /// First name to greet
    pub name: String,

    /// Language code (pl, de, en, fr)
    #[arg(long, default_value = "pl")]
    pub lang: String,

    /// Print the full response as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the greet command.
pub fn run_greet(args: GreetArgs) -> miette::Result<i32> {
    let service = VocativeService::polish().map_err(DictionaryDiagnostic::from)?;
    let request = GreetingRequest::new(&args.name, &args.lang);

    let response = match service.respond(&request) {
        Ok(response) => response,
        Err(e) => {
            if args.json {
                let output = json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Error: {}", e);
            }
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).into_diagnostic()?
        );
        return Ok(exitcode::OK);
    }

    println!("{}", response.greeting);

    let suggestions = suggestions(service.inflector().dictionary(), &args.name, &args.lang);
    if !suggestions.is_empty() {
        eprintln!(
            "{} '{}' is not in the dictionary; did you mean {}?",
            "hint:".if_supports_color(Stream::Stderr, |text| text.yellow()),
            args.name.trim(),
            suggestions.join(", ")
        );
    }

    Ok(exitcode::OK)
}

/// Near-miss dictionary names, only for languages that consult the dictionary.
fn suggestions<'a>(dictionary: &'a NameDictionary, name: &str, lang: &str) -> Vec<&'a str> {
    let consults_dictionary = Language::from_code(lang).is_none_or(Language::inflects);
    if !consults_dictionary || dictionary.lookup(name).is_some() {
        return Vec::new();
    }
    dictionary.suggest(name, MAX_SUGGESTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_near_misses_for_polish() {
        let dictionary = NameDictionary::polish().unwrap();
        assert_eq!(suggestions(&dictionary, "Pioter", "pl"), vec!["piotr"]);
    }

    #[test]
    fn no_suggestions_for_known_names() {
        let dictionary = NameDictionary::polish().unwrap();
        assert!(suggestions(&dictionary, "Piotr", "pl").is_empty());
    }

    #[test]
    fn no_suggestions_when_dictionary_is_bypassed() {
        let dictionary = NameDictionary::polish().unwrap();
        assert!(suggestions(&dictionary, "Pioter", "de").is_empty());
        assert!(!suggestions(&dictionary, "Pioter", "es").is_empty());
    }
}
