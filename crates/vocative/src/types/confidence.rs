use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::error::ConfidenceOutOfRange;

/// Heuristic reliability score of an inflection, always within `[0.0, 1.0]`.
///
/// This is not a calibrated probability. It orders outcomes from "exact
/// dictionary hit" down to "nothing matched" so callers can decide whether
/// the inflected form is safe to show.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Exact dictionary match.
    pub const EXACT: Confidence = Confidence(0.95);
    /// Vocative derived from a `-a` or `-ek` ending.
    pub const SUFFIX: Confidence = Confidence(0.7);
    /// Adjectival surname-like ending, left uninflected.
    pub const ADJECTIVAL: Confidence = Confidence(0.8);
    /// Nothing matched; the name is passed through.
    pub const UNKNOWN: Confidence = Confidence(0.3);
    /// Languages that skip inflection and address by the raw name.
    pub const PASSTHROUGH: Confidence = Confidence(0.8);
    /// Minimum score for a personalized greeting, shared by all languages.
    pub const GREETING_THRESHOLD: Confidence = Confidence(0.8);

    /// Returns `None` for NaN or values outside `[0.0, 1.0]`.
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Confidence(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when this score reaches `threshold` (inclusive).
    pub fn meets(self, threshold: Confidence) -> bool {
        self.0 >= threshold.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceOutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Confidence::new(value).ok_or(ConfidenceOutOfRange { value })
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> f64 {
        confidence.0
    }
}

impl Display for Confidence {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:.2}", self.0)
    }
}
