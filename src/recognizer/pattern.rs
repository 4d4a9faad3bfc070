//! Pattern/gazetteer entity recognizer

use super::{registry::PatternRegistry, EntityRecognizer};
use crate::domain::{EntityKind, FoundEntity};
use crate::gazetteer::Gazetteer;
use anyhow::Result;
use regex::Regex;
use std::sync::Arc;

/// Recognizer built from locale regex patterns and a first-name gazetteer.
pub struct PatternRecognizer {
    registry: Arc<PatternRegistry>,
    gazetteer: Arc<Gazetteer>,
    capitalized_token: Regex,
    following_surname: Regex,
}

impl PatternRecognizer {
    /// Create a recognizer over a pattern registry and gazetteer.
    pub fn new(registry: Arc<PatternRegistry>, gazetteer: Arc<Gazetteer>) -> Result<Self> {
        Ok(Self {
            registry,
            gazetteer,
            capitalized_token: Regex::new(r"\b([A-ZĄĆĘŁŃÓŚŹŻ][a-ząćęłńóśźż]+)\b")?,
            // Anchored at the candidate surname position: exactly one
            // whitespace run, then a capitalized token, optionally hyphenated.
            following_surname: Regex::new(
                r"^\s+([A-ZĄĆĘŁŃÓŚŹŻ][a-ząćęłńóśźż]+(?:-[A-ZĄĆĘŁŃÓŚŹŻ][a-ząćęłńóśźż]+)?)",
            )?,
        })
    }

    /// Scan for person names: a gazetteer first name immediately followed by
    /// a second capitalized token.
    ///
    /// The first token alone is the acceptance gate; the surname token is
    /// deliberately not checked against the surname gazetteer, so any
    /// capitalized word after a known first name is taken as a surname.
    fn find_person_entities(&self, text: &str) -> Vec<FoundEntity> {
        let mut entities = Vec::new();

        for token in self.capitalized_token.find_iter(text) {
            if !self.gazetteer.is_first_name(token.as_str()) {
                continue;
            }

            let rest = &text[token.end()..];
            if let Some(caps) = self.following_surname.captures(rest) {
                let end = token.end() + caps.get(0).map(|m| m.end()).unwrap_or(0);
                entities.push(FoundEntity::new(
                    EntityKind::Person,
                    &text[token.start()..end],
                    token.start(),
                    end,
                ));
            }
        }

        entities
    }

    /// Apply every registered pattern of every non-person kind over the full
    /// text, kind by kind in scan order.
    fn find_pattern_entities(&self, text: &str) -> Vec<FoundEntity> {
        let mut entities = Vec::new();

        for kind in EntityKind::PATTERN_SCAN_ORDER {
            for pattern in self.registry.patterns_for(kind) {
                for m in pattern.regex.find_iter(text) {
                    entities.push(FoundEntity::new(kind, m.as_str(), m.start(), m.end()));
                }
            }
        }

        entities
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<FoundEntity>> {
        let mut entities = self.find_person_entities(text);
        entities.extend(self.find_pattern_entities(text));

        // Stable sort: entities sharing a start offset keep discovery order
        // (person matches first, then pattern kinds in scan order).
        entities.sort_by_key(|e| e.start);

        Ok(entities)
    }
}
