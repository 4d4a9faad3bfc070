//! Edge-case tests: empty input, overlapping spans, sentence boundaries

use anonim::config::EngineConfig;
use anonim::domain::{AnonimError, EntityKind, Strategy};
use anonim::engine::AnonymizationEngine;
use test_case::test_case;

fn engine() -> AnonymizationEngine {
    let mut config = EngineConfig::default();
    config.audit.enabled = false;
    AnonymizationEngine::new(config).unwrap()
}

#[test_case(Strategy::Tag)]
#[test_case(Strategy::Replace)]
#[test_case(Strategy::Remove)]
fn test_empty_input_yields_empty_output(strategy: Strategy) {
    let outcome = engine().anonymize("", strategy).unwrap();
    assert_eq!(outcome.anonymized_text, "");
    assert!(!outcome.has_detections());
}

#[test]
fn test_whitespace_only_input_trims_to_empty() {
    let outcome = engine().anonymize("   \n\t  ", Strategy::Tag).unwrap();
    assert_eq!(outcome.anonymized_text, "");
}

#[test]
fn test_invalid_strategy_value_fails_fast() {
    let err = "redact".parse::<Strategy>().unwrap_err();
    assert!(matches!(err, AnonimError::InvalidStrategy(_)));
    assert!(err.to_string().contains("redact"));
}

#[test]
fn test_identical_overlapping_spans_survive_removal() {
    // An 11-digit run matches both the national-id and the phone pattern on
    // the same span; the second, clamped splice is a no-op.
    let text = "85010112345";
    let outcome = engine().anonymize(text, Strategy::Remove).unwrap();

    assert_eq!(outcome.anonymized_text, "");
    assert_eq!(outcome.total_detections(), 2);
}

#[test]
fn test_identical_overlapping_spans_under_tag_corrupt_but_never_panic() {
    // Overlapping spans are not reconciled: the second replacement lands on
    // the already-rewritten range and degrades the surrounding text. The
    // behavior is retained; this pins it down.
    let text = "PESEL: 85010112345.";
    let outcome = engine().anonymize(text, Strategy::Tag).unwrap();

    assert_eq!(outcome.anonymized_text, "PESEL: [PHONE_NUMBER]D].");
    let kinds: Vec<EntityKind> = outcome.detections.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EntityKind::NationalId, EntityKind::PhoneNumber]);
}

#[test]
fn test_entity_after_last_terminator_is_never_linked() {
    let text = "Jan Kowalski wrócił. Telefon: 601-123-456";
    let outcome = engine().anonymize(text, Strategy::Tag).unwrap();

    assert_eq!(
        outcome.anonymized_text,
        "[PERSON_1] wrócił. Telefon: [PHONE_NUMBER]"
    );
}

#[test]
fn test_text_without_terminators_is_one_sentence() {
    let text = "Jan Kowalski ma telefon 601-123-456";
    let outcome = engine().anonymize(text, Strategy::Tag).unwrap();

    assert_eq!(outcome.anonymized_text, "[PERSON_1] ma telefon [PERSON_1]");
}

#[test]
fn test_multibyte_polish_text_survives_rewriting() {
    let text = "Łukasz Żółtowski zgłosił żądanie usunięcia.";
    let outcome = engine().anonymize(text, Strategy::Tag).unwrap();

    assert_eq!(outcome.anonymized_text, "[PERSON_1] zgłosił żądanie usunięcia.");
}

#[test]
fn test_no_double_counting_of_adjacent_people() {
    // The surname token of one match can start another when it is itself a
    // gazetteer first name.
    let text = "Adam Jan Kowalski wyszedł.";
    let outcome = engine().anonymize(text, Strategy::Tag).unwrap();

    let people: Vec<_> = outcome
        .detections
        .iter()
        .filter(|e| e.kind == EntityKind::Person)
        .collect();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].text, "Adam Jan");
    assert_eq!(people[1].text, "Jan Kowalski");
}

#[test]
fn test_remove_output_never_longer_than_input() {
    let texts = [
        "Jan Kowalski, PESEL 85010112345, tel. 601-123-456.",
        "Anna Nowak mieszka przy ul. Lipowa 12 w mieście 00-950 Warszawa.",
        "bez żadnych danych",
    ];
    for text in texts {
        let outcome = engine().anonymize(text, Strategy::Remove).unwrap();
        assert!(
            outcome.anonymized_text.len() <= text.len(),
            "grew: {text:?} -> {:?}",
            outcome.anonymized_text
        );
    }
}
