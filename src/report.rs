//! Batch detection reporting
//!
//! Aggregates the outcomes of a batch run into a summary report: how much
//! PII was found, of which kinds, how many person profiles were
//! consolidated, and how long processing took. Used together with dry-run
//! mode to preview what a strategy would touch.

use crate::domain::{AnonymizationOutcome, EntityKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated detection statistics for a batch of texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Total texts analyzed
    pub total_texts: usize,

    /// Total PII entities detected
    pub total_detections: usize,

    /// Detections by entity kind
    pub detections_by_kind: BTreeMap<EntityKind, usize>,

    /// Person profiles consolidated across all texts
    pub total_profiles: usize,

    /// Warnings raised during the batch
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

/// Processing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per text (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Texts with PII detected
    pub texts_with_pii: usize,

    /// Texts without PII
    pub texts_without_pii: usize,
}

impl DetectionReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self {
            total_texts: 0,
            total_detections: 0,
            detections_by_kind: BTreeMap::new(),
            total_profiles: 0,
            warnings: Vec::new(),
            stats: ProcessingStats {
                avg_processing_time_ms: 0,
                total_processing_time_ms: 0,
                texts_with_pii: 0,
                texts_without_pii: 0,
            },
        }
    }

    /// Fold one outcome into the report.
    pub fn add_outcome(&mut self, outcome: &AnonymizationOutcome) {
        self.total_texts += 1;
        self.stats.total_processing_time_ms += outcome.processing_time_ms;
        self.total_profiles += outcome.profile_count();

        if outcome.has_detections() {
            self.stats.texts_with_pii += 1;
            self.total_detections += outcome.total_detections();

            for (kind, count) in &outcome.stats_by_kind {
                *self.detections_by_kind.entry(*kind).or_insert(0) += count;
            }
        } else {
            self.stats.texts_without_pii += 1;
        }

        if self.total_texts > 0 {
            self.stats.avg_processing_time_ms =
                self.stats.total_processing_time_ms / self.total_texts as u64;
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format the report for console output.
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("\n═══════════════════════════════════════════════\n");
        output.push_str("           PII DETECTION REPORT\n");
        output.push_str("═══════════════════════════════════════════════\n\n");

        output.push_str(&format!("  Texts analyzed:      {}\n", self.total_texts));
        output.push_str(&format!(
            "  Texts with PII:      {}\n",
            self.stats.texts_with_pii
        ));
        output.push_str(&format!(
            "  Texts without PII:   {}\n",
            self.stats.texts_without_pii
        ));
        output.push_str(&format!("  Entities detected:   {}\n", self.total_detections));
        output.push_str(&format!("  Profiles built:      {}\n", self.total_profiles));
        output.push_str(&format!(
            "  Avg processing time: {} ms\n",
            self.stats.avg_processing_time_ms
        ));

        if !self.detections_by_kind.is_empty() {
            output.push_str("\n  Detections by kind\n");
            output.push_str("  ───────────────────────────────\n");

            let mut kinds: Vec<_> = self.detections_by_kind.iter().collect();
            kinds.sort_by(|a, b| b.1.cmp(a.1));

            for (kind, count) in kinds {
                output.push_str(&format!("  {:24} {:>5}\n", kind.label(), count));
            }
        }

        if !self.warnings.is_empty() {
            output.push_str("\n  Warnings\n");
            output.push_str("  ───────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  - {warning}\n"));
            }
        }

        output.push_str("\n═══════════════════════════════════════════════\n");

        output
    }

    /// Format the report as pretty JSON.
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON report to a file.
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for DetectionReport {
    fn default() -> Self {
        Self::new()
    }
}
