//! Tagging replacement strategy

use super::ReplacementStrategy;
use crate::domain::{FoundEntity, PersonProfile};
use anyhow::Result;

/// Replaces linked entities with their profile tag and unlinked entities
/// with a bracketed kind label.
pub struct TagStrategy;

impl TagStrategy {
    /// Create a new tagging strategy.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementStrategy for TagStrategy {
    fn replacement(
        &mut self,
        entity: &FoundEntity,
        profile: Option<&PersonProfile>,
    ) -> Result<String> {
        Ok(match profile {
            Some(profile) => profile.tag.clone(),
            None => entity.kind.bracketed_label(),
        })
    }
}

impl Default for TagStrategy {
    fn default() -> Self {
        Self::new()
    }
}
