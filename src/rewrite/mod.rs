//! Strategy-driven text rewriting
//!
//! Provides the replacement-strategy trait, its tag/remove/fabricate
//! implementations, and [`TextRewriter`], which applies replacements to the
//! source text.

pub mod fabricate;
pub mod remove;
pub mod tag;

use crate::domain::{FoundEntity, PersonProfile};
use anyhow::Result;
use regex::Regex;
use std::collections::BTreeMap;

pub use fabricate::FabricateStrategy;
pub use remove::RemoveStrategy;
pub use tag::TagStrategy;

/// Trait for replacement-strategy implementations.
///
/// `&mut self` allows stateful strategies (the fabrication strategy consumes
/// randomness). `profile` is the entity's linked person profile, when any.
pub trait ReplacementStrategy {
    /// Produce the replacement string for one entity occurrence.
    fn replacement(
        &mut self,
        entity: &FoundEntity,
        profile: Option<&PersonProfile>,
    ) -> Result<String>;
}

/// Applies a replacement strategy to the source text.
///
/// Replacement order is a contract, not an implementation detail: entities
/// are processed in descending start order, so splicing a later span never
/// invalidates the offsets of spans still to be processed. Overlapping spans
/// are not reconciled; when an earlier overlapping replacement has already
/// shifted the tail, the splice is clamped to the live buffer, which degrades
/// the overlapped output but never panics.
pub struct TextRewriter {
    whitespace_run: Regex,
}

impl TextRewriter {
    /// Create a rewriter.
    pub fn new() -> Self {
        Self {
            whitespace_run: Regex::new(r"\s\s+").expect("whitespace pattern is valid"),
        }
    }

    /// Rewrite `text`, replacing every entity span via `strategy`.
    ///
    /// After all splices, runs of two or more whitespace characters collapse
    /// to a single space and the result is trimmed; removal can leave such
    /// runs behind, and the collapse is applied uniformly under every
    /// strategy.
    pub fn rewrite(
        &self,
        text: &str,
        profiles: &BTreeMap<u32, PersonProfile>,
        entities: &[FoundEntity],
        strategy: &mut dyn ReplacementStrategy,
    ) -> Result<String> {
        let mut ordered: Vec<&FoundEntity> = entities.iter().collect();
        // Stable: entities sharing a start keep discovery order.
        ordered.sort_by(|a, b| b.start.cmp(&a.start));

        let mut output = text.to_string();
        for entity in ordered {
            let profile = entity.person_id.and_then(|id| profiles.get(&id));
            let replacement = strategy.replacement(entity, profile)?;
            splice(&mut output, entity.start, entity.end, &replacement);
        }

        let collapsed = self.whitespace_run.replace_all(&output, " ");
        Ok(collapsed.trim().to_string())
    }
}

impl Default for TextRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace `[start, end)` in `buffer`, clamping both offsets to the live
/// buffer and flooring them to `char` boundaries.
fn splice(buffer: &mut String, start: usize, end: usize, replacement: &str) {
    let start = floor_char_boundary(buffer, start.min(buffer.len()));
    let end = floor_char_boundary(buffer, end.min(buffer.len())).max(start);
    buffer.replace_range(start..end, replacement);
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
