//! Audit logger for anonymization runs

use crate::domain::{AnonymizationOutcome, FoundEntity};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    strategy: String,
    detections_count: usize,
    profiles_count: usize,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    kind: String,
    start: usize,
    end: usize,
    person_id: Option<u32>,
    /// SHA-256 hash of the matched value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for anonymization runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger.
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create audit log directory: {}", parent.display())
                    })?;
                }
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log one anonymization run.
    pub fn log_run(&self, outcome: &AnonymizationOutcome) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: outcome.timestamp.to_rfc3339(),
            strategy: outcome.strategy_applied.to_string(),
            detections_count: outcome.detections.len(),
            profiles_count: outcome.profiles.len(),
            processing_time_ms: outcome.processing_time_ms,
            detections: outcome
                .detections
                .iter()
                .map(|d| self.create_audit_detection(d))
                .collect(),
        };

        self.write_entry(&entry)
    }

    fn create_audit_detection(&self, entity: &FoundEntity) -> AuditDetection {
        AuditDetection {
            kind: entity.kind.label().to_string(),
            start: entity.start,
            end: entity.end,
            person_id: entity.person_id,
            value_hash: self.hash_pii_value(&entity.text),
        }
    }

    /// Hash a PII value using SHA-256.
    fn hash_pii_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Strategy: {} | Detections: {} | Profiles: {} | Time: {}ms",
                entry.timestamp,
                entry.strategy,
                entry.detections_count,
                entry.profiles_count,
                entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityKind, Strategy};
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn outcome_with_email() -> AnonymizationOutcome {
        let detections = vec![FoundEntity::new(
            EntityKind::Email,
            "jan.kowalski@firma.pl",
            9,
            30,
        )];
        AnonymizationOutcome::new(
            "Kontakt: [EMAIL]".to_string(),
            Strategy::Tag,
            detections,
            BTreeMap::new(),
            4,
        )
    }

    #[test]
    fn test_hash_is_stable_and_value_sensitive() {
        let dir = tempdir().unwrap();
        let logger = AuditLogger::new(dir.path().join("audit.log"), true, true).unwrap();

        let hash1 = logger.hash_pii_value("jan@firma.pl");
        let hash2 = logger.hash_pii_value("jan@firma.pl");
        let hash3 = logger.hash_pii_value("anna@firma.pl");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
    }

    #[test]
    fn test_log_run_never_writes_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, true).unwrap();

        logger.log_run(&outcome_with_email()).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("EMAIL"));
        assert!(content.contains("\"strategy\":\"tag\""));
        assert!(!content.contains("jan.kowalski@firma.pl"));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, false).unwrap();

        logger.log_run(&outcome_with_email()).unwrap();
        assert!(!log_path.exists());
    }

    #[test]
    fn test_plain_text_format() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false, true).unwrap();

        logger.log_run(&outcome_with_email()).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Strategy: tag"));
        assert!(content.contains("Detections: 1"));
    }
}
