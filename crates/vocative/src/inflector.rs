//! The inflection engine: dictionary lookup followed by suffix fallback.

use std::sync::Arc;

use crate::dictionary::{NameDictionary, fold_name};
use crate::error::DictionaryError;
use crate::rules::fallback;
use crate::types::{Confidence, InflectionResult};

/// Maps a first name to its vocative form, gender and confidence.
///
/// The engine is pure: it holds only the immutable dictionary, so it can be
/// cloned cheaply and shared across threads.
///
/// # Example
///
/// ```
/// use vocative::{Confidence, Gender, Inflector};
///
/// let inflector = Inflector::polish().unwrap();
/// let result = inflector.infer("PIOTR");
/// assert_eq!(result.vocative, "Piotrze");
/// assert_eq!(result.gender, Gender::Masculine);
/// assert_eq!(result.confidence, Confidence::EXACT);
/// ```
#[derive(Debug, Clone)]
pub struct Inflector {
    dictionary: Arc<NameDictionary>,
}

impl Inflector {
    pub fn new(dictionary: NameDictionary) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
        }
    }

    /// Engine backed by the built-in Polish dictionary.
    pub fn polish() -> Result<Self, DictionaryError> {
        NameDictionary::polish().map(Self::new)
    }

    pub fn dictionary(&self) -> &NameDictionary {
        &self.dictionary
    }

    /// Infer the vocative of a non-empty name.
    ///
    /// Total over its input: names that match nothing come back unchanged
    /// with [`Confidence::UNKNOWN`].
    pub fn infer(&self, first_name: &str) -> InflectionResult {
        let name = first_name.trim();
        let folded = fold_name(name);
        match self.dictionary.get_folded(&folded) {
            Some(entry) => {
                InflectionResult::new(entry.vocative.clone(), entry.gender, Confidence::EXACT)
            }
            None => fallback(name, &folded),
        }
    }
}
