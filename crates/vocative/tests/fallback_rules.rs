//! Tests for the suffix fallback chain, independent of the dictionary.

use vocative::rules::{FALLBACK_RULES, SuffixClass, classify, fallback};
use vocative::{Confidence, Gender, InflectionResult};

// =========================================================================
// Rule Order
// =========================================================================

#[test]
fn rules_are_ordered_by_priority() {
    let classes: Vec<SuffixClass> = FALLBACK_RULES.iter().map(|rule| rule.class).collect();
    assert_eq!(
        classes,
        vec![
            SuffixClass::FeminineA,
            SuffixClass::DiminutiveEk,
            SuffixClass::Adjectival
        ]
    );
}

#[test]
fn feminine_a_wins_over_adjectival_for_ska() {
    let rule = classify("kowalska").unwrap();
    assert_eq!(rule.class, SuffixClass::FeminineA);
    assert_eq!(
        fallback("Kowalska", "kowalska"),
        InflectionResult::new("Kowalsko", Gender::Feminine, Confidence::SUFFIX)
    );
}

// =========================================================================
// Feminine -a
// =========================================================================

#[test]
fn feminine_a_replaces_ending_with_o() {
    assert_eq!(
        fallback("Zosia", "zosia"),
        InflectionResult::new("Zosio", Gender::Feminine, Confidence::SUFFIX)
    );
}

#[test]
fn feminine_a_requires_more_than_three_letters() {
    assert!(!SuffixClass::FeminineA.matches("ola"));
    assert!(SuffixClass::FeminineA.matches("kasia"));
    assert_eq!(
        fallback("Ola", "ola"),
        InflectionResult::new("Ola", Gender::Masculine, Confidence::UNKNOWN)
    );
}

#[test]
fn feminine_a_counts_polish_letters_once() {
    assert!(SuffixClass::FeminineA.matches("łąka"));
    assert_eq!(SuffixClass::FeminineA.inflect("Łąka"), "Łąko");
}

#[test]
fn feminine_a_preserves_stem_casing() {
    assert_eq!(SuffixClass::FeminineA.inflect("ZOSIA"), "ZOSIo");
}

// =========================================================================
// Diminutive -ek
// =========================================================================

#[test]
fn diminutive_ek_replaces_ending_with_ku() {
    assert_eq!(
        fallback("Marek", "marek"),
        InflectionResult::new("Marku", Gender::Masculine, Confidence::SUFFIX)
    );
    assert_eq!(SuffixClass::DiminutiveEk.inflect("Jacek"), "Jacku");
}

#[test]
fn diminutive_ek_requires_more_than_three_letters() {
    assert!(!SuffixClass::DiminutiveEk.matches("bek"));
    assert!(SuffixClass::DiminutiveEk.matches("olek"));
}

#[test]
fn diminutive_ek_preserves_stem_casing() {
    assert_eq!(SuffixClass::DiminutiveEk.inflect("MAREK"), "MARku");
}

// =========================================================================
// Adjectival Endings
// =========================================================================

#[test]
fn adjectival_endings_pass_through() {
    for (name, folded) in [
        ("Kowalski", "kowalski"),
        ("Kowalczycki", "kowalczycki"),
        ("Zawadzki", "zawadzki"),
    ] {
        assert_eq!(
            fallback(name, folded),
            InflectionResult::new(name, Gender::Masculine, Confidence::ADJECTIVAL)
        );
    }
}

#[test]
fn adjectival_ending_has_no_length_requirement() {
    assert!(SuffixClass::Adjectival.matches("ski"));
}

// =========================================================================
// Catch-all
// =========================================================================

#[test]
fn unmatched_names_pass_through_with_low_confidence() {
    assert!(classify("xavier").is_none());
    assert_eq!(
        fallback("Xavier", "xavier"),
        InflectionResult::new("Xavier", Gender::Masculine, Confidence::UNKNOWN)
    );
}
