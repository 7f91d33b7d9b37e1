//! Template expansion configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_PASSES;

/// Configuration for the grammar expansion engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Floor for the per-phase pass ceiling. The effective ceiling is
    /// `max(min_passes, table size + 1)`. Default: 16.
    pub min_passes: Option<usize>,
}

impl ExpansionConfig {
    pub fn effective_min_passes(&self) -> usize {
        self.min_passes.unwrap_or(DEFAULT_MIN_PASSES)
    }

    pub fn overlay(&mut self, upper: &ExpansionConfig) {
        self.min_passes = upper.min_passes.or(self.min_passes);
    }
}
