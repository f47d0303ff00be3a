pub mod dictionary;
pub mod error;
pub mod greeting;
pub mod inflector;
pub mod rules;
pub mod service;
pub mod types;

pub use dictionary::NameDictionary;
pub use error::{ConfidenceOutOfRange, DictionaryError, GreetingError};
pub use greeting::GreetingComposer;
pub use inflector::Inflector;
pub use rules::{FALLBACK_RULES, FallbackRule, SuffixClass};
pub use service::VocativeService;
pub use types::{
    Confidence, Gender, GreetingRequest, GreetingResponse, InflectionResult, Language, NameEntry,
};
