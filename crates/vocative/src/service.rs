//! Request orchestration: validation, engine dispatch and greeting composition.

use bon::Builder;
use tracing::{debug, warn};

use crate::error::{DictionaryError, GreetingError};
use crate::greeting::GreetingComposer;
use crate::inflector::Inflector;
use crate::types::{
    Confidence, Gender, GreetingRequest, GreetingResponse, InflectionResult, Language,
};

/// Handles one greeting request end to end.
///
/// Transport layers call [`VocativeService::respond`] once per request and
/// serialize the result. The service holds no mutable state.
#[derive(Debug, Clone, Builder)]
pub struct VocativeService {
    inflector: Inflector,
    #[builder(default)]
    composer: GreetingComposer,
}

impl VocativeService {
    /// Service over the built-in Polish dictionary with default thresholds.
    pub fn polish() -> Result<Self, DictionaryError> {
        Ok(VocativeService::builder()
            .inflector(Inflector::polish()?)
            .build())
    }

    pub fn inflector(&self) -> &Inflector {
        &self.inflector
    }

    pub fn composer(&self) -> &GreetingComposer {
        &self.composer
    }

    /// Validate `request`, inflect the name and compose the greeting.
    ///
    /// German requests bypass the engine and address the raw name with
    /// [`Gender::Unknown`] and [`Confidence::PASSTHROUGH`]. Unrecognized
    /// language codes run the engine but are greeted in Polish with the raw
    /// first name.
    ///
    /// # Errors
    ///
    /// Returns [`GreetingError::InvalidInput`] when the first name is blank.
    pub fn respond(&self, request: &GreetingRequest) -> Result<GreetingResponse, GreetingError> {
        let first_name = request.first_name.trim();
        if first_name.is_empty() {
            debug!(language = %request.language, "rejected blank first name");
            return Err(GreetingError::InvalidInput);
        }

        let language = Language::from_code(&request.language);
        let result = match language {
            Some(lang) if !lang.inflects() => {
                InflectionResult::new(first_name, Gender::Unknown, Confidence::PASSTHROUGH)
            }
            _ => self.inflector.infer(first_name),
        };
        let greeting = match language {
            Some(lang) => self.composer.compose(first_name, &result, lang),
            None => {
                warn!(code = %request.language, "unsupported language code, greeting in Polish");
                self.composer.compose_unsupported(first_name, &result)
            }
        };

        debug!(
            first_name,
            language = %request.language,
            gender = %result.gender,
            confidence = result.confidence.value(),
            "composed greeting"
        );

        Ok(GreetingResponse {
            vocative: result.vocative,
            gender: result.gender,
            greeting,
            confidence: result.confidence,
        })
    }
}

