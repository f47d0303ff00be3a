//! Tests for the name dictionary: lookup, validation and suggestions.

use vocative::dictionary::{POLISH_NAMES, fold_name};
use vocative::{DictionaryError, Gender, NameDictionary, NameEntry};

// =========================================================================
// Built-in Table
// =========================================================================

#[test]
fn builtin_table_has_no_duplicates() {
    let dictionary = NameDictionary::polish().unwrap();
    assert_eq!(dictionary.len(), POLISH_NAMES.len());
    assert_eq!(dictionary.len(), 63);
}

#[test]
fn builtin_table_splits_by_gender() {
    let dictionary = NameDictionary::polish().unwrap();
    let masculine = dictionary
        .entries()
        .filter(|entry| entry.gender == Gender::Masculine)
        .count();
    let feminine = dictionary
        .entries()
        .filter(|entry| entry.gender == Gender::Feminine)
        .count();
    assert_eq!(masculine, 28);
    assert_eq!(feminine, 35);
}

#[test]
fn entries_iterate_in_canonical_order() {
    let dictionary = NameDictionary::polish().unwrap();
    let names: Vec<&str> = dictionary.entries().map(|e| e.name.as_str()).collect();
    assert_eq!(names.first(), Some(&"adam"));
    assert_eq!(names.last(), Some(&"łukasz"));
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn lookup_is_case_insensitive() {
    let dictionary = NameDictionary::polish().unwrap();
    for spelling in ["piotr", "Piotr", "PIOTR", "pIoTr"] {
        let entry = dictionary.lookup(spelling).unwrap();
        assert_eq!(entry.vocative, "Piotrze");
        assert_eq!(entry.gender, Gender::Masculine);
    }
}

#[test]
fn lookup_folds_polish_capitals() {
    let dictionary = NameDictionary::polish().unwrap();
    assert_eq!(dictionary.lookup("ŁUKASZ").unwrap().vocative, "Łukaszu");
    assert_eq!(dictionary.lookup("ELŻBIETA").unwrap().vocative, "Elżbieto");
}

#[test]
fn lookup_trims_whitespace() {
    let dictionary = NameDictionary::polish().unwrap();
    assert_eq!(dictionary.lookup("  Anna\t").unwrap().vocative, "Anno");
}

#[test]
fn diacritic_free_spellings_are_separate_keys() {
    let dictionary = NameDictionary::polish().unwrap();
    assert_eq!(dictionary.lookup("Pawel").unwrap().vocative, "Pawle");
    assert_eq!(dictionary.lookup("Michal").unwrap().vocative, "Michale");
    assert_eq!(dictionary.lookup("Michał").unwrap().vocative, "Michałe");
    assert_eq!(dictionary.lookup("Lukasz").unwrap().vocative, "Łukaszu");
}

#[test]
fn lookup_misses_unknown_names() {
    let dictionary = NameDictionary::polish().unwrap();
    assert!(dictionary.lookup("Xavier").is_none());
    assert!(dictionary.lookup("Zosia").is_none());
}

#[test]
fn fold_name_trims_and_lowercases() {
    assert_eq!(fold_name(" Małgorzata "), "małgorzata");
    assert_eq!(fold_name("GRAŻYNA"), "grażyna");
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn duplicate_key_fails_instead_of_overwriting() {
    let err = NameDictionary::from_entries([
        NameEntry::new("paweł", "Pawle", Gender::Masculine),
        NameEntry::new("Jan", "Janie", Gender::Masculine),
        NameEntry::new("PAWEŁ", "Pawełe", Gender::Masculine),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        DictionaryError::DuplicateName {
            name: "paweł".to_string(),
            first: "Pawle".to_string(),
            second: "Pawełe".to_string(),
        }
    );
}

#[test]
fn identical_duplicates_are_still_rejected() {
    let err = NameDictionary::from_entries([
        NameEntry::new("marcin", "Marcinie", Gender::Masculine),
        NameEntry::new("marcin", "Marcinie", Gender::Masculine),
    ])
    .unwrap_err();
    assert!(matches!(err, DictionaryError::DuplicateName { name, .. } if name == "marcin"));
}

#[test]
fn blank_name_is_rejected() {
    let err = NameDictionary::from_entries([NameEntry::new("   ", "Nic", Gender::Unknown)])
        .unwrap_err();
    assert_eq!(
        err,
        DictionaryError::EmptyName {
            vocative: "Nic".to_string()
        }
    );
}

#[test]
fn stored_names_are_canonicalized() {
    let dictionary =
        NameDictionary::from_entries([NameEntry::new(" Zofia ", "Zofio", Gender::Feminine)])
            .unwrap();
    let entry = dictionary.lookup("zofia").unwrap();
    assert_eq!(entry.name, "zofia");
}

#[test]
fn empty_dictionary_is_valid() {
    let dictionary = NameDictionary::from_entries([]).unwrap();
    assert!(dictionary.is_empty());
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn suggest_finds_transposed_letters() {
    let dictionary = NameDictionary::polish().unwrap();
    assert_eq!(dictionary.suggest("Piort", 3), vec!["piotr"]);
}

#[test]
fn suggest_orders_by_distance_and_respects_limit() {
    let dictionary = NameDictionary::polish().unwrap();
    assert_eq!(dictionary.suggest("Ana", 1), vec!["anna"]);
}

#[test]
fn suggest_skips_exact_matches() {
    let dictionary = NameDictionary::polish().unwrap();
    assert!(!dictionary.suggest("anna", 10).contains(&"anna"));
}

#[test]
fn suggest_returns_nothing_for_distant_names() {
    let dictionary = NameDictionary::polish().unwrap();
    assert!(dictionary.suggest("Bartholomew", 5).is_empty());
}
