//! Entity recognition
//!
//! Provides a trait-based recognition interface and the pattern/gazetteer
//! implementation. The trait is the seam for a future learned recognizer;
//! the shipped [`PatternRecognizer`] is an explicit stand-in built from
//! locale regex patterns and a first-name gazetteer.

pub mod pattern;
pub mod registry;

use crate::domain::FoundEntity;
use anyhow::Result;

pub use pattern::PatternRecognizer;
pub use registry::{CompiledPattern, PatternRegistry};

/// Trait for entity recognition implementations.
pub trait EntityRecognizer: Send + Sync {
    /// Recognize PII occurrences in `text`.
    ///
    /// Pure and deterministic for a fixed input: returns entities sorted
    /// ascending by start offset, with discovery order preserved between
    /// entities sharing a start position. Overlapping matches from different
    /// patterns are all kept.
    fn recognize(&self, text: &str) -> Result<Vec<FoundEntity>>;
}
