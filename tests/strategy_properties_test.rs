//! Property-style tests for the three anonymization strategies

use anonim::config::EngineConfig;
use anonim::domain::Strategy;
use anonim::engine::AnonymizationEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use test_case::test_case;

fn engine() -> AnonymizationEngine {
    let mut config = EngineConfig::default();
    config.audit.enabled = false;
    AnonymizationEngine::new(config).unwrap()
}

#[test_case(Strategy::Tag)]
#[test_case(Strategy::Replace)]
#[test_case(Strategy::Remove)]
fn test_no_entity_text_passes_through(strategy: Strategy) {
    // No gazetteer name, no pattern match, no whitespace runs
    let text = "spotkanie zaplanowano na przyszły wtorek w sali numer cztery";
    let outcome = engine().anonymize(text, strategy).unwrap();
    assert_eq!(outcome.anonymized_text, text);
    assert!(!outcome.has_detections());
}

#[test]
fn test_tag_output_is_byte_identical_across_runs() {
    let text = "Jan Kowalski (PESEL 85010112345) mieszka przy ul. Polna 7.";
    let engine = engine();

    let first = engine.anonymize(text, Strategy::Tag).unwrap();
    let second = engine.anonymize(text, Strategy::Tag).unwrap();

    assert_eq!(first.anonymized_text, second.anonymized_text);
}

#[test]
fn test_tag_uses_one_tag_per_person() {
    let text = "Anna Nowak ma telefon 601-123-456.";
    let outcome = engine().anonymize(text, Strategy::Tag).unwrap();

    // Both the name and the linked phone render as the profile tag
    assert_eq!(
        outcome.anonymized_text.matches("[PERSON_1]").count(),
        outcome.detections.len()
    );
}

#[test_case("Jan Kowalski mieszka w Warszawie."; "person only")]
#[test_case("Telefon kontaktowy: 601-123-456."; "phone only")]
#[test_case("Adres e-mail: jan.kowalski@firma.pl istnieje."; "email")]
fn test_remove_never_grows_text_and_erases_matches(text: &str) {
    let outcome = engine().anonymize(text, Strategy::Remove).unwrap();

    assert!(outcome.anonymized_text.len() <= text.len());
    for detection in &outcome.detections {
        assert!(
            !outcome.anonymized_text.contains(&detection.text),
            "{:?} survived removal",
            detection.text
        );
    }
}

#[test]
fn test_fabricated_email_has_token_and_fixed_domain() {
    let text = "Kontakt: jan.kowalski@firma.pl";
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(31);
    let outcome = engine
        .anonymize_with_rng(text, Strategy::Replace, &mut rng)
        .unwrap();

    let shape = Regex::new(r"^Kontakt: [a-z]{5}@example\.com$").unwrap();
    assert!(shape.is_match(&outcome.anonymized_text), "{:?}", outcome.anonymized_text);
}

#[test]
fn test_fabricated_person_drawn_from_gazetteer_tables() {
    let text = "Jan Kowalski mieszka w Warszawie.";
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(77);
    let outcome = engine
        .anonymize_with_rng(text, Strategy::Replace, &mut rng)
        .unwrap();

    let identity = outcome.profiles[&1].replacement_identity.clone().unwrap();
    assert!(outcome.anonymized_text.starts_with(&identity));

    let gazetteer = anonim::gazetteer::Gazetteer::default_polish().unwrap();
    let first = identity.split_whitespace().next().unwrap();
    assert!(gazetteer.is_male_first_name(first));
}

#[test]
fn test_disjoint_replacements_do_not_corrupt_neighbours() {
    // Three disjoint spans; everything between them must survive verbatim
    let text = "abc jan@firma.pl def 00-950 Warszawa ghi linkedin.com/in/jan xyz";
    let outcome = engine().anonymize(text, Strategy::Tag).unwrap();

    assert_eq!(
        outcome.anonymized_text,
        "abc [EMAIL] def [POSTAL_ADDRESS] ghi [SOCIAL_PROFILE_URL] xyz"
    );
}

#[test]
fn test_strategies_differ_on_the_same_input() {
    let text = "Jan Kowalski mieszka w Warszawie.";
    let engine = engine();

    let tagged = engine.anonymize(text, Strategy::Tag).unwrap();
    let removed = engine.anonymize(text, Strategy::Remove).unwrap();

    assert!(tagged.anonymized_text.contains("[PERSON_1]"));
    assert!(!removed.anonymized_text.contains("[PERSON_1]"));
    assert!(!removed.anonymized_text.contains("Kowalski"));
}
