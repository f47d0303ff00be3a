use serde::Serialize;

use super::{Confidence, Gender};

/// One row of the name dictionary.
///
/// `name` is the canonical case-folded key once the entry is stored in a
/// [`NameDictionary`](crate::NameDictionary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub name: String,
    pub vocative: String,
    pub gender: Gender,
}

impl NameEntry {
    pub fn new(name: impl Into<String>, vocative: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            vocative: vocative.into(),
            gender,
        }
    }
}

/// Output of the inflection engine for a single name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InflectionResult {
    pub vocative: String,
    pub gender: Gender,
    pub confidence: Confidence,
}

impl InflectionResult {
    pub fn new(vocative: impl Into<String>, gender: Gender, confidence: Confidence) -> Self {
        Self {
            vocative: vocative.into(),
            gender,
            confidence,
        }
    }
}
