//! Generation configuration and the resolved options handed to the generator.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_PASSES;
use crate::types::{Explanation, Level, Verbosity};

/// Configuration for what gets generated.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GenerationConfig {
    /// Semantic level. Default: 1.
    pub level: Option<Level>,
    /// Verbosity. Default: medium.
    pub verbosity: Option<Verbosity>,
    /// UpSet explanation preamble. Default: none.
    pub explain: Option<Explanation>,
    /// Return a structured description at the default level. Default: false.
    pub structured: Option<bool>,
}

impl GenerationConfig {
    /// Take every value `upper` sets, keep ours elsewhere.
    pub fn overlay(&mut self, upper: &GenerationConfig) {
        self.level = upper.level.or(self.level);
        self.verbosity = upper.verbosity.or(self.verbosity);
        self.explain = upper.explain.or(self.explain);
        self.structured = upper.structured.or(self.structured);
    }
}

/// Fully resolved options for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub level: Level,
    pub verbosity: Verbosity,
    pub explain: Explanation,
    pub structured: bool,
    pub min_passes: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            level: Level::default(),
            verbosity: Verbosity::default(),
            explain: Explanation::default(),
            structured: false,
            min_passes: DEFAULT_MIN_PASSES,
        }
    }
}
