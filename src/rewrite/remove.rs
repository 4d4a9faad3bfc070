//! Removal replacement strategy

use super::ReplacementStrategy;
use crate::domain::{FoundEntity, PersonProfile};
use anyhow::Result;

/// Deletes every entity span. The rewriter's whitespace collapse cleans up
/// the runs the deletions leave behind.
pub struct RemoveStrategy;

impl RemoveStrategy {
    /// Create a new removal strategy.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementStrategy for RemoveStrategy {
    fn replacement(
        &mut self,
        _entity: &FoundEntity,
        _profile: Option<&PersonProfile>,
    ) -> Result<String> {
        Ok(String::new())
    }
}

impl Default for RemoveStrategy {
    fn default() -> Self {
        Self::new()
    }
}
