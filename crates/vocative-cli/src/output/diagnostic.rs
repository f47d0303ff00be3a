//! Miette diagnostic wrapper for dictionary validation errors.

use miette::Diagnostic;
use thiserror::Error;
use vocative::DictionaryError;

/// A miette-compatible diagnostic for a rejected name dictionary.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid name dictionary")]
#[diagnostic(code(vocative::dictionary))]
pub struct DictionaryDiagnostic {
    source: DictionaryError,

    #[help]
    help: String,
}

impl From<DictionaryError> for DictionaryDiagnostic {
    fn from(source: DictionaryError) -> Self {
        let help = match &source {
            DictionaryError::DuplicateName { name, .. } => format!(
                "keep a single row for '{name}' in POLISH_NAMES; \
                 the data owner decides which vocative is correct"
            ),
            DictionaryError::EmptyName { .. } => "remove the row or give it a name".to_string(),
        };
        Self { source, help }
    }
}
