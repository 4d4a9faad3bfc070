// Anonim - PII anonymization engine for Polish-language text
// Copyright (c) 2025 Anonim Contributors
// Licensed under the MIT License

//! # Anonim - PII anonymization for Polish text
//!
//! Anonim detects personally-identifiable information in free-form
//! Polish-language text, links related fragments to the same underlying
//! person, and rewrites the text with a selected anonymization strategy.
//!
//! ## Overview
//!
//! One call runs the full pipeline:
//! - **Recognition** - locale regex patterns plus a first-name gazetteer
//!   produce positioned entity candidates
//! - **Linking** - person profiles are consolidated by name, and nearby
//!   entities (job titles, single-person sentences) attach to them
//! - **Rewriting** - spans are replaced right-to-left with tags, fabricated
//!   values, or nothing
//!
//! ## Architecture
//!
//! - [`engine`] - pipeline orchestration and batch entry points
//! - [`recognizer`] - recognition trait, pattern registry, implementation
//! - [`linker`] - profile consolidation and contextual attachment
//! - [`rewrite`] - replacement strategies and the splicing rewriter
//! - [`gazetteer`] - immutable locale reference tables
//! - [`domain`] - entities, profiles, strategies, outcomes, errors
//! - [`config`] - engine configuration with env overrides
//! - [`audit`] - hashed audit trail of anonymization runs
//! - [`report`] - batch detection reporting
//! - [`logging`] - structured logging setup
//!
//! ## Quick start
//!
//! ```
//! use anonim::config::EngineConfig;
//! use anonim::domain::Strategy;
//! use anonim::engine::AnonymizationEngine;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut config = EngineConfig::default();
//! config.audit.enabled = false;
//! let engine = AnonymizationEngine::new(config)?;
//!
//! let outcome = engine.anonymize(
//!     "Jan Kowalski mieszka w Krakowie.",
//!     Strategy::Tag,
//! )?;
//!
//! assert_eq!(outcome.anonymized_text, "[PERSON_1] mieszka w Krakowie.");
//! # Ok(())
//! # }
//! ```
//!
//! ## Strategies
//!
//! The strategy set is closed (`"tag"`, `"replace"`, `"remove"`); parsing
//! any other value fails fast with a descriptive error. Fabrication
//! (`replace`) draws substitute identities and values from the gazetteer;
//! pass a seeded generator to
//! [`engine::AnonymizationEngine::anonymize_with_rng`] for reproducible
//! output.
//!
//! ## Limitations
//!
//! The recognizer is a pattern/gazetteer stand-in for a learned model: the
//! person detector gates only on the first name, and overlapping matches
//! from different patterns are deliberately not reconciled. De-anonymization
//! is not implemented anywhere; no reversible mapping ever leaves a run.

pub mod audit;
pub mod config;
pub mod domain;
pub mod engine;
pub mod gazetteer;
pub mod linker;
pub mod logging;
pub mod recognizer;
pub mod report;
pub mod rewrite;

// Re-export main types
pub use config::EngineConfig;
pub use domain::{AnonimError, AnonymizationOutcome, EntityKind, FoundEntity, PersonProfile, Strategy};
pub use engine::AnonymizationEngine;
pub use report::DetectionReport;
