//! Main anonymization engine
//!
//! This module provides the core [`AnonymizationEngine`] that orchestrates
//! entity recognition, profile linking, and strategy-driven rewriting for
//! free-form text.
//!
//! # Architecture
//!
//! The engine coordinates three stages per invocation:
//! - **Recognizer**: finds PII occurrences using locale patterns and the
//!   first-name gazetteer
//! - **Linker**: consolidates person profiles and attaches related entities
//! - **Rewriter**: splices replacements for the selected strategy
//!
//! # Examples
//!
//! ```
//! use anonim::config::EngineConfig;
//! use anonim::domain::Strategy;
//! use anonim::engine::AnonymizationEngine;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut config = EngineConfig::default();
//! config.audit.enabled = false;
//! let engine = AnonymizationEngine::new(config)?;
//!
//! let outcome = engine.anonymize("Jan Kowalski mieszka w Krakowie.", Strategy::Tag)?;
//! println!("{}", outcome.anonymized_text);
//! # Ok(())
//! # }
//! ```

use crate::audit::AuditLogger;
use crate::config::EngineConfig;
use crate::domain::{AnonymizationOutcome, Strategy};
use crate::gazetteer::Gazetteer;
use crate::linker::ProfileBuilder;
use crate::recognizer::{EntityRecognizer, PatternRecognizer, PatternRegistry};
use crate::report::DetectionReport;
use crate::rewrite::{
    FabricateStrategy, RemoveStrategy, ReplacementStrategy, TagStrategy, TextRewriter,
};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Instant;

/// Main anonymization engine.
///
/// # Thread safety
///
/// The engine can be shared across threads behind an `Arc`: the gazetteer
/// and pattern registry are read-only, every `anonymize` call allocates its
/// own profile table, entity list, and random generator, and nothing is
/// mutated across invocations.
pub struct AnonymizationEngine {
    config: EngineConfig,
    recognizer: Arc<dyn EntityRecognizer>,
    linker: ProfileBuilder,
    rewriter: TextRewriter,
    gazetteer: Arc<Gazetteer>,
    audit_logger: Option<AuditLogger>,
}

impl AnonymizationEngine {
    /// Create a new engine.
    ///
    /// Loads the pattern registry and gazetteer (built-in libraries unless
    /// the configuration points at files) and initializes the audit logger
    /// when enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails, a library file
    /// cannot be loaded or compiled, or the audit logger cannot be created.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid engine configuration")?;

        let registry = if let Some(ref path) = config.pattern_library {
            PatternRegistry::from_file(path)?
        } else {
            PatternRegistry::default_patterns()?
        };

        let gazetteer = Arc::new(if let Some(ref path) = config.gazetteer_library {
            Gazetteer::from_file(path)?
        } else {
            Gazetteer::default_polish()?
        });

        let recognizer: Arc<dyn EntityRecognizer> = Arc::new(PatternRecognizer::new(
            Arc::new(registry),
            Arc::clone(&gazetteer),
        )?);

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            linker: ProfileBuilder::new(Arc::clone(&gazetteer)),
            rewriter: TextRewriter::new(),
            config,
            recognizer,
            gazetteer,
            audit_logger,
        })
    }

    /// Anonymize one text with the selected strategy.
    ///
    /// Uses an entropy-seeded generator for the invocation; fabrication is
    /// therefore non-deterministic here. Tests that need reproducible
    /// fabricated values use [`anonymize_with_rng`](Self::anonymize_with_rng)
    /// with a seeded generator.
    pub fn anonymize(&self, text: &str, strategy: Strategy) -> Result<AnonymizationOutcome> {
        let mut rng = StdRng::from_entropy();
        self.anonymize_with_rng(text, strategy, &mut rng)
    }

    /// Anonymize one text, consuming the caller's random generator.
    pub fn anonymize_with_rng<R: Rng>(
        &self,
        text: &str,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<AnonymizationOutcome> {
        let start = Instant::now();

        let entities = self.recognizer.recognize(text)?;
        tracing::debug!(
            detections = entities.len(),
            strategy = %strategy,
            "Recognized entities"
        );

        let (profiles, entities) = self.linker.link(text, entities, strategy, rng);

        let anonymized_text = if self.config.dry_run {
            text.to_string()
        } else {
            let mut replacer: Box<dyn ReplacementStrategy + '_> = match strategy {
                Strategy::Tag => Box::new(TagStrategy::new()),
                Strategy::Remove => Box::new(RemoveStrategy::new()),
                Strategy::Replace => Box::new(FabricateStrategy::new(&self.gazetteer, rng)),
            };
            self.rewriter
                .rewrite(text, &profiles, &entities, replacer.as_mut())?
        };

        let processing_time = start.elapsed().as_millis() as u64;
        let outcome = AnonymizationOutcome::new(
            anonymized_text,
            strategy,
            entities,
            profiles,
            processing_time,
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_run(&outcome)?;
        }

        Ok(outcome)
    }

    /// Anonymize a batch of texts.
    ///
    /// Fail-safe: a text that fails is logged and skipped rather than
    /// aborting the batch.
    pub fn anonymize_batch(
        &self,
        texts: &[String],
        strategy: Strategy,
    ) -> Result<Vec<AnonymizationOutcome>> {
        let mut results = Vec::with_capacity(texts.len());

        for text in texts {
            match self.anonymize(text, strategy) {
                Ok(outcome) => results.push(outcome),
                Err(e) => {
                    tracing::error!(error = ?e, "Failed to anonymize text");
                    continue;
                }
            }
        }

        Ok(results)
    }

    /// Anonymize a batch and aggregate a detection report.
    pub fn anonymize_batch_with_report(
        &self,
        texts: &[String],
        strategy: Strategy,
    ) -> Result<(Vec<AnonymizationOutcome>, DetectionReport)> {
        let mut results = Vec::with_capacity(texts.len());
        let mut report = DetectionReport::new();

        for text in texts {
            match self.anonymize(text, strategy) {
                Ok(outcome) => {
                    report.add_outcome(&outcome);
                    results.push(outcome);
                }
                Err(e) => {
                    tracing::error!(error = ?e, "Failed to anonymize text");
                    report.add_warning(format!("Failed to anonymize text: {e}"));
                    continue;
                }
            }
        }

        Ok((results, report))
    }

    /// Whether the engine is in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}
