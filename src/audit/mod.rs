//! Audit trail for anonymization runs
//!
//! Records every run as an append-only log entry with SHA-256-hashed
//! original values; plaintext PII never reaches the audit file.

pub mod logger;

pub use logger::AuditLogger;
