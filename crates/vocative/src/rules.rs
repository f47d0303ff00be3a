//! Suffix-based fallback rules for names missing from the dictionary.
//!
//! Rules are evaluated in the fixed order of [`FALLBACK_RULES`]; the first
//! rule whose suffix class matches wins. When none matches, the name is passed
//! through unchanged as masculine with [`Confidence::UNKNOWN`].

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Confidence, Gender, InflectionResult};

/// Names must be longer than this (in grapheme clusters) for the `-a` and
/// `-ek` rules to apply.
pub const MIN_INFLECTED_LENGTH: usize = 3;

/// Endings of adjectival, surname-like names that stay uninflected.
pub const ADJECTIVAL_ENDINGS: [&str; 3] = ["ski", "cki", "dzki"];

/// Suffix families recognized by the fallback stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixClass {
    /// `-a`: Anna -> Anno.
    FeminineA,
    /// `-ek`: Marek -> Marku.
    DiminutiveEk,
    /// `-ski`, `-cki`, `-dzki`: left as is.
    Adjectival,
}

impl SuffixClass {
    /// Whether a case-folded name belongs to this class.
    pub fn matches(self, folded: &str) -> bool {
        match self {
            SuffixClass::FeminineA => {
                folded.ends_with('a') && grapheme_len(folded) > MIN_INFLECTED_LENGTH
            }
            SuffixClass::DiminutiveEk => {
                folded.ends_with("ek") && grapheme_len(folded) > MIN_INFLECTED_LENGTH
            }
            SuffixClass::Adjectival => ADJECTIVAL_ENDINGS
                .iter()
                .any(|ending| folded.ends_with(ending)),
        }
    }

    /// Build the vocative from the trimmed spelling the caller sent.
    ///
    /// The stem keeps the caller's casing; only the replaced ending is
    /// lowercase.
    pub fn inflect(self, name: &str) -> String {
        match self {
            SuffixClass::FeminineA => format!("{}o", drop_last_graphemes(name, 1)),
            SuffixClass::DiminutiveEk => format!("{}ku", drop_last_graphemes(name, 2)),
            SuffixClass::Adjectival => name.to_string(),
        }
    }
}

/// A single predicate -> result rule of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackRule {
    pub class: SuffixClass,
    pub gender: Gender,
    pub confidence: Confidence,
}

impl FallbackRule {
    pub fn apply(&self, name: &str) -> InflectionResult {
        InflectionResult::new(self.class.inflect(name), self.gender, self.confidence)
    }
}

/// Fallback rules in priority order.
pub static FALLBACK_RULES: [FallbackRule; 3] = [
    FallbackRule {
        class: SuffixClass::FeminineA,
        gender: Gender::Feminine,
        confidence: Confidence::SUFFIX,
    },
    FallbackRule {
        class: SuffixClass::DiminutiveEk,
        gender: Gender::Masculine,
        confidence: Confidence::SUFFIX,
    },
    FallbackRule {
        class: SuffixClass::Adjectival,
        gender: Gender::Masculine,
        confidence: Confidence::ADJECTIVAL,
    },
];

/// First rule matching a case-folded name, if any.
pub fn classify(folded: &str) -> Option<&'static FallbackRule> {
    FALLBACK_RULES.iter().find(|rule| rule.class.matches(folded))
}

/// Run the fallback chain, ending in the pass-through catch-all.
///
/// `name` is the trimmed spelling the caller sent, `folded` its canonical form.
pub fn fallback(name: &str, folded: &str) -> InflectionResult {
    match classify(folded) {
        Some(rule) => rule.apply(name),
        None => InflectionResult::new(name, Gender::Masculine, Confidence::UNKNOWN),
    }
}

fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

fn drop_last_graphemes(s: &str, count: usize) -> &str {
    match count.checked_sub(1) {
        Some(skip) => s
            .grapheme_indices(true)
            .rev()
            .nth(skip)
            .map_or("", |(index, _)| &s[..index]),
        None => s,
    }
}
