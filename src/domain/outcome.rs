//! Pipeline outcome record

use crate::domain::entity::{EntityKind, FoundEntity};
use crate::domain::profile::PersonProfile;
use crate::domain::strategy::Strategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of one anonymization run.
///
/// Carries the rewritten text together with everything the run produced:
/// the recognized (and possibly linked) entities, the consolidated person
/// profiles, per-kind detection counts, and timing. Detections and profiles
/// contain the original PII values; callers that persist or forward the
/// outcome should do so through the audit logger, which hashes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationOutcome {
    /// Rewritten text for the selected strategy
    pub anonymized_text: String,
    /// Strategy that produced this outcome
    pub strategy_applied: Strategy,
    /// All recognized entities, in ascending start order
    pub detections: Vec<FoundEntity>,
    /// Consolidated person profiles keyed by id
    pub profiles: BTreeMap<u32, PersonProfile>,
    /// Detection counts by entity kind
    pub stats_by_kind: BTreeMap<EntityKind, usize>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of the run
    pub timestamp: DateTime<Utc>,
}

impl AnonymizationOutcome {
    /// Assemble an outcome, deriving the per-kind stats from the detections.
    pub fn new(
        anonymized_text: String,
        strategy_applied: Strategy,
        detections: Vec<FoundEntity>,
        profiles: BTreeMap<u32, PersonProfile>,
        processing_time_ms: u64,
    ) -> Self {
        let mut stats_by_kind = BTreeMap::new();
        for detection in &detections {
            *stats_by_kind.entry(detection.kind).or_insert(0) += 1;
        }

        Self {
            anonymized_text,
            strategy_applied,
            detections,
            profiles,
            stats_by_kind,
            processing_time_ms,
            timestamp: Utc::now(),
        }
    }

    /// Total number of recognized entities.
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Whether any PII was recognized.
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }

    /// Number of person profiles consolidated during the run.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_derived_from_detections() {
        let detections = vec![
            FoundEntity::new(EntityKind::Email, "a@b.pl", 0, 6),
            FoundEntity::new(EntityKind::Email, "c@d.pl", 10, 16),
            FoundEntity::new(EntityKind::NationalId, "85010112345", 20, 31),
        ];

        let outcome = AnonymizationOutcome::new(
            "[EMAIL] [EMAIL] [NATIONAL_ID]".to_string(),
            Strategy::Tag,
            detections,
            BTreeMap::new(),
            3,
        );

        assert_eq!(outcome.total_detections(), 3);
        assert_eq!(outcome.stats_by_kind.get(&EntityKind::Email), Some(&2));
        assert_eq!(outcome.stats_by_kind.get(&EntityKind::NationalId), Some(&1));
        assert_eq!(outcome.profile_count(), 0);
        assert!(outcome.has_detections());
    }
}
