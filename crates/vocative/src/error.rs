//! Error types for the vocative engine.

use thiserror::Error;

/// Errors raised while building a [`NameDictionary`](crate::NameDictionary).
///
/// Both variants indicate bad source data and should stop startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// Two entries fold to the same canonical key.
    #[error("duplicate dictionary entry '{name}': '{first}' and '{second}'")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    /// Entry whose name is blank after trimming.
    #[error("dictionary entry with vocative '{vocative}' has an empty name")]
    EmptyName { vocative: String },
}

/// Errors reported for a single greeting request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    /// `firstName` was empty or whitespace-only.
    #[error("Imię nie może być puste")]
    InvalidInput,

    /// Unexpected fault while handling the request.
    #[error("Błąd przetwarzania: {message}")]
    Internal { message: String },
}

impl GreetingError {
    pub fn internal(message: impl Into<String>) -> Self {
        GreetingError::Internal {
            message: message.into(),
        }
    }
}

/// A confidence score outside `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("confidence {value} is outside [0.0, 1.0]")]
pub struct ConfidenceOutOfRange {
    pub value: f64,
}
