use std::fmt::{Display, Formatter, Result as FmtResult};

/// Languages a greeting can be composed in.
///
/// Only Polish receives genuine inflection. German skips the engine entirely
/// and addresses the person by the raw name; English and French run the
/// engine for its confidence score but greet with the raw name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Polish,
    German,
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Polish,
        Language::German,
        Language::English,
        Language::French,
    ];

    /// Two-letter code used on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Language::Polish => "pl",
            Language::German => "de",
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Resolve an exact, lowercase two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Whether the inflection engine is consulted for this language.
    pub fn inflects(self) -> bool {
        !matches!(self, Language::German)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}
