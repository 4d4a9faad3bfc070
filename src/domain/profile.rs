//! Consolidated person profiles

use crate::domain::entity::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One consolidated person identity built during linking.
///
/// Profile ids are small positive integers assigned in first-seen order
/// (first profile = 1) and are unique within a single pipeline run; profiles
/// are never merged or deleted once created. A profile never outlives the
/// `(text, strategy)` call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Run-scoped identifier, starting at 1
    pub id: u32,
    /// Display tag derived from the id, e.g. `[PERSON_2]`
    pub tag: String,
    /// All name forms seen for this person (full name plus bare first name)
    pub known_names: BTreeSet<String>,
    /// Distinct PII values linked to this person, keyed by kind
    pub linked_pii: BTreeMap<EntityKind, BTreeSet<String>>,
    /// Substitute identity, generated once per profile under the
    /// fabrication strategy and reused for every occurrence
    pub replacement_identity: Option<String>,
}

impl PersonProfile {
    /// Create a profile seeded with the matched full name and first name.
    pub fn new(id: u32, full_name: &str, first_name: &str) -> Self {
        let mut known_names = BTreeSet::new();
        known_names.insert(full_name.to_string());
        known_names.insert(first_name.to_string());

        Self {
            id,
            tag: format!("[PERSON_{id}]"),
            known_names,
            linked_pii: BTreeMap::new(),
            replacement_identity: None,
        }
    }

    /// Record an additional name form for this person.
    pub fn add_name(&mut self, name: &str) {
        self.known_names.insert(name.to_string());
    }

    /// Record a linked PII value under its kind.
    pub fn record_pii(&mut self, kind: EntityKind, value: &str) {
        self.linked_pii
            .entry(kind)
            .or_default()
            .insert(value.to_string());
    }

    /// Distinct values of one kind linked to this person.
    pub fn pii_values(&self, kind: EntityKind) -> Option<&BTreeSet<String>> {
        self.linked_pii.get(&kind)
    }

    /// Total number of linked PII values across all kinds.
    pub fn linked_value_count(&self) -> usize {
        self.linked_pii.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_seeds_both_name_forms() {
        let profile = PersonProfile::new(1, "Jan Kowalski", "Jan");
        assert_eq!(profile.tag, "[PERSON_1]");
        assert!(profile.known_names.contains("Jan Kowalski"));
        assert!(profile.known_names.contains("Jan"));
    }

    #[test]
    fn test_record_pii_deduplicates() {
        let mut profile = PersonProfile::new(2, "Anna Nowak", "Anna");
        profile.record_pii(EntityKind::Email, "anna@firma.pl");
        profile.record_pii(EntityKind::Email, "anna@firma.pl");
        profile.record_pii(EntityKind::PhoneNumber, "601-123-456");

        assert_eq!(
            profile.pii_values(EntityKind::Email).map(BTreeSet::len),
            Some(1)
        );
        assert_eq!(profile.linked_value_count(), 2);
    }
}
