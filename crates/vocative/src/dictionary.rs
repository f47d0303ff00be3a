//! Static dictionary of Polish first names and their vocative forms.
//!
//! The dictionary is the lookup stage of the inflection engine. It is built
//! once at startup from [`POLISH_NAMES`] and never mutated afterwards, so a
//! single instance can be shared across any number of request handlers.
//!
//! Keys are stored case-folded. Two source rows folding to the same key are a
//! data defect and fail the build with [`DictionaryError::DuplicateName`]
//! rather than letting the later row win.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use icu_casemap::CaseMapper;
use strsim::levenshtein;

use crate::error::DictionaryError;
use crate::types::{Gender, NameEntry};

/// Maximum edit distance for "did you mean" suggestions.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Built-in Polish name table: (name, vocative, gender).
///
/// Diacritic-less spellings (`pawel`, `michal`, `lukasz`) are separate keys
/// because contact data frequently drops Polish letters. Their vocatives do
/// not agree on whether to restore the diacritic; that is left for the data
/// owner to settle.
pub const POLISH_NAMES: &[(&str, &str, Gender)] = &[
    // Masculine
    ("piotr", "Piotrze", Gender::Masculine),
    ("jan", "Janie", Gender::Masculine),
    ("andrzej", "Andrzeju", Gender::Masculine),
    ("tomasz", "Tomaszu", Gender::Masculine),
    ("paweł", "Pawle", Gender::Masculine),
    ("michał", "Michałe", Gender::Masculine),
    ("krzysztof", "Krzysztofie", Gender::Masculine),
    ("jakub", "Jakubie", Gender::Masculine),
    ("mateusz", "Mateuszu", Gender::Masculine),
    ("adam", "Adamie", Gender::Masculine),
    ("łukasz", "Łukaszu", Gender::Masculine),
    ("szymon", "Szymonie", Gender::Masculine),
    ("bartosz", "Bartoszu", Gender::Masculine),
    ("krystian", "Krystianie", Gender::Masculine),
    ("grzegorz", "Grzegorzu", Gender::Masculine),
    ("marcin", "Marcinie", Gender::Masculine),
    ("damian", "Damianie", Gender::Masculine),
    ("dawid", "Dawidzie", Gender::Masculine),
    ("kamil", "Kamilu", Gender::Masculine),
    ("rafał", "Rafale", Gender::Masculine),
    ("mariusz", "Mariuszu", Gender::Masculine),
    ("robert", "Robercie", Gender::Masculine),
    ("artur", "Arturze", Gender::Masculine),
    ("przemysław", "Przemysławie", Gender::Masculine),
    ("radosław", "Radosławie", Gender::Masculine),
    ("pawel", "Pawle", Gender::Masculine),
    ("michal", "Michale", Gender::Masculine),
    ("lukasz", "Łukaszu", Gender::Masculine),
    // Feminine
    ("anna", "Anno", Gender::Feminine),
    ("maria", "Mario", Gender::Feminine),
    ("katarzyna", "Katarzyno", Gender::Feminine),
    ("małgorzata", "Małgorzato", Gender::Feminine),
    ("agnieszka", "Agnieszko", Gender::Feminine),
    ("krystyna", "Krystyno", Gender::Feminine),
    ("monika", "Moniko", Gender::Feminine),
    ("joanna", "Joanno", Gender::Feminine),
    ("magdalena", "Magdaleno", Gender::Feminine),
    ("elżbieta", "Elżbieto", Gender::Feminine),
    ("danuta", "Danuto", Gender::Feminine),
    ("ewa", "Ewo", Gender::Feminine),
    ("barbara", "Barbaro", Gender::Feminine),
    ("teresa", "Tereso", Gender::Feminine),
    ("halina", "Halino", Gender::Feminine),
    ("helena", "Heleno", Gender::Feminine),
    ("grażyna", "Grażyno", Gender::Feminine),
    ("jolanta", "Jolanto", Gender::Feminine),
    ("stanisława", "Stanisławo", Gender::Feminine),
    ("renata", "Renato", Gender::Feminine),
    ("aleksandra", "Aleksandro", Gender::Feminine),
    ("beata", "Beato", Gender::Feminine),
    ("dorota", "Doroto", Gender::Feminine),
    ("iwona", "Iwono", Gender::Feminine),
    ("justyna", "Justyno", Gender::Feminine),
    ("patrycja", "Patrycjo", Gender::Feminine),
    ("sylwia", "Sylwio", Gender::Feminine),
    ("natalia", "Natalio", Gender::Feminine),
    ("marta", "Marto", Gender::Feminine),
    ("karolina", "Karolino", Gender::Feminine),
    ("paulina", "Paulino", Gender::Feminine),
    ("marlena", "Marleno", Gender::Feminine),
    ("wiktoria", "Wiktorio", Gender::Feminine),
    ("olga", "Olgo", Gender::Feminine),
    ("wanda", "Wando", Gender::Feminine),
];

/// Trim and Unicode case-fold a name into its canonical key form.
///
/// # Example
///
/// ```
/// use vocative::dictionary::fold_name;
///
/// assert_eq!(fold_name("  ŁUKASZ "), "łukasz");
/// ```
pub fn fold_name(name: &str) -> String {
    String::from(CaseMapper::new().fold_string(name.trim()))
}

/// Immutable mapping from canonical first names to vocative entries.
#[derive(Debug, Clone, Default)]
pub struct NameDictionary {
    entries: BTreeMap<String, NameEntry>,
}

impl NameDictionary {
    /// Build a dictionary, rejecting blank names and duplicate keys.
    ///
    /// Each entry's `name` is replaced with its folded form.
    ///
    /// # Example
    ///
    /// ```
    /// use vocative::{DictionaryError, Gender, NameDictionary, NameEntry};
    ///
    /// let err = NameDictionary::from_entries([
    ///     NameEntry::new("Ola", "Olu", Gender::Feminine),
    ///     NameEntry::new("OLA", "Olo", Gender::Feminine),
    /// ])
    /// .unwrap_err();
    /// assert!(matches!(err, DictionaryError::DuplicateName { .. }));
    /// ```
    pub fn from_entries(
        entries: impl IntoIterator<Item = NameEntry>,
    ) -> Result<Self, DictionaryError> {
        let mut map: BTreeMap<String, NameEntry> = BTreeMap::new();
        for entry in entries {
            let key = fold_name(&entry.name);
            if key.is_empty() {
                return Err(DictionaryError::EmptyName {
                    vocative: entry.vocative,
                });
            }
            match map.entry(key) {
                Entry::Occupied(existing) => {
                    return Err(DictionaryError::DuplicateName {
                        name: existing.get().name.clone(),
                        first: existing.get().vocative.clone(),
                        second: entry.vocative,
                    });
                }
                Entry::Vacant(slot) => {
                    let name = slot.key().clone();
                    slot.insert(NameEntry { name, ..entry });
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Build the dictionary from the built-in [`POLISH_NAMES`] table.
    pub fn polish() -> Result<Self, DictionaryError> {
        Self::from_entries(
            POLISH_NAMES
                .iter()
                .map(|&(name, vocative, gender)| NameEntry::new(name, vocative, gender)),
        )
    }

    /// Case-insensitive lookup of a raw name.
    pub fn lookup(&self, name: &str) -> Option<&NameEntry> {
        self.get_folded(&fold_name(name))
    }

    /// Lookup of a name that is already in canonical folded form.
    pub fn get_folded(&self, folded: &str) -> Option<&NameEntry> {
        self.entries.get(folded)
    }

    /// All entries in canonical-name order.
    pub fn entries(&self) -> impl Iterator<Item = &NameEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical names within a small edit distance of `name`, closest first.
    ///
    /// Exact matches are excluded. Ties are broken alphabetically.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<&str> {
        let folded = fold_name(name);
        let mut candidates: Vec<(usize, &str)> = self
            .entries
            .keys()
            .map(|key| (levenshtein(&folded, key), key.as_str()))
            .filter(|&(distance, _)| distance > 0 && distance <= MAX_SUGGESTION_DISTANCE)
            .collect();
        candidates.sort_unstable();
        candidates
            .into_iter()
            .take(limit)
            .map(|(_, key)| key)
            .collect()
    }
}
