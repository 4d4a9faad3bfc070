//! Profile consolidation and entity linking
//!
//! [`ProfileBuilder`] turns the recognizer's flat entity list into canonical
//! person profiles and attaches non-person entities to them where contextual
//! rules justify it. The rules are proximity heuristics, not semantic
//! parsing: attachment only happens when a sentence is unambiguous (exactly
//! one resolved person).

use crate::domain::{EntityKind, FoundEntity, PersonProfile, Strategy};
use crate::gazetteer::Gazetteer;
use rand::Rng;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Builds person profiles and links entities to them.
///
/// Stateless across invocations; all per-run state lives in the call frame of
/// [`link`](Self::link).
pub struct ProfileBuilder {
    gazetteer: Arc<Gazetteer>,
    // A sentence is a maximal run of non-terminal characters followed by a
    // run of terminal punctuation. Text after the last terminator belongs to
    // no sentence; a text without terminators is one sentence.
    sentence: Regex,
}

impl ProfileBuilder {
    /// Create a profile builder over the shared gazetteer.
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self {
            gazetteer,
            sentence: Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"),
        }
    }

    /// Consolidate profiles and link entities.
    ///
    /// Runs four phases in a fixed order (the order is a contract):
    /// 1. profile creation for person entities, resolving by exact full name
    ///    and then by bare first name;
    /// 2. job-title attachment to an immediately following resolved person;
    /// 3. sentence-scoped attachment when a sentence holds exactly one
    ///    resolved person;
    /// 4. aggregation of every linked entity's text into its profile.
    ///
    /// Deterministic under [`Strategy::Tag`] and [`Strategy::Remove`]; under
    /// [`Strategy::Replace`] the injected `rng` is consumed to draw one
    /// replacement identity per new profile.
    pub fn link<R: Rng>(
        &self,
        text: &str,
        mut entities: Vec<FoundEntity>,
        strategy: Strategy,
        rng: &mut R,
    ) -> (BTreeMap<u32, PersonProfile>, Vec<FoundEntity>) {
        let mut profiles: BTreeMap<u32, PersonProfile> = BTreeMap::new();
        let mut name_to_profile: HashMap<String, u32> = HashMap::new();
        let mut next_id: u32 = 1;

        // Phase 1: person profiles
        for entity in entities.iter_mut().filter(|e| e.is_person()) {
            let full_name = entity.text.clone();
            let first_name = full_name
                .split_whitespace()
                .next()
                .unwrap_or(full_name.as_str())
                .to_string();

            let profile_id = name_to_profile
                .get(&full_name)
                .or_else(|| name_to_profile.get(&first_name))
                .copied()
                .unwrap_or_else(|| {
                    let id = next_id;
                    next_id += 1;

                    let mut profile = PersonProfile::new(id, &full_name, &first_name);
                    if strategy == Strategy::Replace {
                        profile.replacement_identity =
                            Some(self.fabricate_identity(&first_name, rng));
                    }

                    profiles.insert(id, profile);
                    name_to_profile.insert(full_name.clone(), id);
                    name_to_profile.insert(first_name.clone(), id);
                    id
                });

            entity.person_id = Some(profile_id);
            if let Some(profile) = profiles.get_mut(&profile_id) {
                profile.add_name(&full_name);
                profile.add_name(&first_name);
            }
        }

        // Phase 2: a job title directly preceding a resolved person belongs
        // to that person ("Prezes Jan Kowalski").
        for i in 0..entities.len().saturating_sub(1) {
            if entities[i].kind != EntityKind::JobTitle {
                continue;
            }
            let next = &entities[i + 1];
            let adjacent_person = if next.is_person()
                && entities[i].end <= next.start
                && text[entities[i].end..next.start].trim().is_empty()
            {
                next.person_id
            } else {
                None
            };
            if adjacent_person.is_some() {
                entities[i].person_id = adjacent_person;
            }
        }

        // Phase 3: sentence-scoped attachment
        for (s_start, s_end) in self.sentence_spans(text) {
            let people_in_sentence: Vec<u32> = entities
                .iter()
                .filter(|e| e.is_person() && e.within(s_start, s_end))
                .filter_map(|e| e.person_id)
                .collect();

            if people_in_sentence.len() != 1 {
                continue;
            }
            let person_id = people_in_sentence[0];

            for entity in entities
                .iter_mut()
                .filter(|e| e.within(s_start, s_end) && e.person_id.is_none())
            {
                entity.person_id = Some(person_id);
            }
        }

        // Phase 4: aggregation
        for entity in &entities {
            if let Some(profile) = entity.person_id.and_then(|id| profiles.get_mut(&id)) {
                profile.record_pii(entity.kind, &entity.text);
            }
        }

        (profiles, entities)
    }

    /// Byte spans of the sentences in `text`.
    fn sentence_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let spans: Vec<(usize, usize)> = self
            .sentence
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect();

        if spans.is_empty() {
            vec![(0, text.len())]
        } else {
            spans
        }
    }

    /// Draw a substitute identity: a first name from the gender bucket
    /// implied by the original first name, plus a random surname.
    fn fabricate_identity<R: Rng>(&self, original_first_name: &str, rng: &mut R) -> String {
        let first = self
            .gazetteer
            .random_first_name_like(original_first_name, rng);
        let surname = self.gazetteer.random_surname(rng);
        format!("{first} {surname}")
    }
}
