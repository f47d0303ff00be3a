use serde::{Deserialize, Serialize};

use super::{Confidence, Gender, Language};

/// Incoming request: a first name and the language to greet in.
///
/// `language` stays a raw string because unrecognized codes are accepted and
/// greeted in Polish with the raw first name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingRequest {
    pub first_name: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl GreetingRequest {
    pub fn new(first_name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            language: language.into(),
        }
    }
}

fn default_language() -> String {
    Language::default().code().to_string()
}

/// Combined result returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub vocative: String,
    pub gender: Gender,
    pub greeting: String,
    pub confidence: Confidence,
}
