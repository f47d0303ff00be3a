use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Grammatical gender inferred for a first name.
///
/// Gender selects the address title in Polish greetings (`Pani` / `Panie`).
/// It describes the grammar of the name, not the person carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Masculine,
    #[serde(rename = "F")]
    Feminine,
    #[serde(rename = "U")]
    Unknown,
}

impl Gender {
    /// Single-letter wire code: `M`, `F` or `U`.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Masculine => "M",
            Gender::Feminine => "F",
            Gender::Unknown => "U",
        }
    }

    /// Parse a wire code, accepting either case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" | "m" => Some(Gender::Masculine),
            "F" | "f" => Some(Gender::Feminine),
            "U" | "u" => Some(Gender::Unknown),
            _ => None,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}
