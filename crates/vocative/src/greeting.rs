//! Greeting composition on top of an inflection result.

use bon::Builder;

use crate::types::{Confidence, Gender, InflectionResult, Language};

/// Turns an inflection result into a user-facing greeting.
///
/// Results at or above `threshold` get a personalized greeting; anything
/// below degrades to the bare salutation of the language, so a doubtful
/// inflection is never shown to the person being addressed.
///
/// # Example
///
/// ```
/// use vocative::{Confidence, Gender, GreetingComposer, InflectionResult, Language};
///
/// let composer = GreetingComposer::default();
/// let anna = InflectionResult::new("Anno", Gender::Feminine, Confidence::EXACT);
/// assert_eq!(
///     composer.compose("Anna", &anna, Language::Polish),
///     "Dzień dobry Pani Anno"
/// );
///
/// let unknown = InflectionResult::new("Xavier", Gender::Masculine, Confidence::UNKNOWN);
/// assert_eq!(composer.compose("Xavier", &unknown, Language::Polish), "Dzień dobry");
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct GreetingComposer {
    #[builder(default = Confidence::GREETING_THRESHOLD)]
    threshold: Confidence,
}

impl Default for GreetingComposer {
    fn default() -> Self {
        GreetingComposer::builder().build()
    }
}

impl GreetingComposer {
    pub fn threshold(&self) -> Confidence {
        self.threshold
    }

    /// Compose the greeting for `first_name` in `language`.
    ///
    /// Only Polish uses the inflected vocative; every other language
    /// addresses the person by the raw first name.
    pub fn compose(&self, first_name: &str, result: &InflectionResult, language: Language) -> String {
        let hello = salutation(language);
        if !result.confidence.meets(self.threshold) {
            return hello.to_string();
        }
        match language {
            Language::Polish => match result.gender {
                Gender::Feminine => format!("{hello} Pani {}", result.vocative),
                Gender::Masculine => format!("{hello} Panie {}", result.vocative),
                Gender::Unknown => format!("{hello} {first_name}"),
            },
            Language::German => format!("{hello} Herr/Frau {first_name}"),
            Language::English | Language::French => format!("{hello} {first_name}"),
        }
    }

    /// Compose the greeting for a request whose language code is not
    /// supported.
    ///
    /// Uses Polish phrasing but never the vocative: a confident result
    /// addresses the raw first name without a title.
    pub fn compose_unsupported(&self, first_name: &str, result: &InflectionResult) -> String {
        let hello = salutation(Language::Polish);
        if result.confidence.meets(self.threshold) {
            format!("{hello} {first_name}")
        } else {
            hello.to_string()
        }
    }
}

/// Generic greeting used when no name is interpolated.
pub fn salutation(language: Language) -> &'static str {
    match language {
        Language::Polish => "Dzień dobry",
        Language::German => "Guten Tag",
        Language::English => "Good day",
        Language::French => "Bonjour",
    }
}
