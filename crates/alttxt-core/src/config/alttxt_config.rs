//! Layered configuration.
//!
//! Layers are applied lowest first, each one overlaying only the keys it
//! sets: compiled defaults, `~/.alttxt/config.toml`, `alttxt.toml` in the
//! project root, `ALTTXT_*` environment variables, then CLI flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ExpansionConfig, GenerationConfig, GenerationOptions};
use crate::constants::{ENV_PREFIX, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;
use crate::types::{Explanation, Level, Verbosity};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AltTxtConfig {
    pub generation: GenerationConfig,
    pub expansion: ExpansionConfig,
}

/// Flags a caller passes on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub level: Option<Level>,
    pub verbosity: Option<Verbosity>,
    pub explain: Option<Explanation>,
    pub structured: Option<bool>,
}

impl From<&CliOverrides> for AltTxtConfig {
    fn from(cli: &CliOverrides) -> Self {
        Self {
            generation: GenerationConfig {
                level: cli.level,
                verbosity: cli.verbosity,
                explain: cli.explain,
                structured: cli.structured,
            },
            expansion: ExpansionConfig::default(),
        }
    }
}

impl AltTxtConfig {
    /// Resolve every layer for a project rooted at `root`.
    ///
    /// A user config that cannot be read is skipped with a warning; one that
    /// is malformed is an error. The project config must be well formed.
    pub fn load(root: &Path, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = user_config_path().filter(|p| p.exists()) {
            match Self::read_file(&path) {
                Ok(user) => config.overlay(&user),
                Err(e @ ConfigError::Unreadable { .. }) => {
                    tracing::warn!(error = %e, "skipping user config");
                }
                Err(e) => return Err(e),
            }
        }

        let project = root.join(PROJECT_CONFIG_FILE);
        if project.exists() {
            config.overlay(&Self::read_file(&project)?);
        }

        config.overlay(&Self::from_env());

        if let Some(cli) = cli {
            config.overlay(&AltTxtConfig::from(cli));
        }

        config.validate()?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Parse and validate a config held in memory.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config = parse(text, "<string>")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.expansion.min_passes {
            Some(0) => Err(ConfigError::OutOfRange {
                field: "expansion.min_passes".to_string(),
                message: "must be at least 1".to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Fill unset keys with their defaults.
    pub fn to_options(&self) -> GenerationOptions {
        let g = &self.generation;
        GenerationOptions {
            level: g.level.unwrap_or_default(),
            verbosity: g.verbosity.unwrap_or_default(),
            explain: g.explain.unwrap_or_default(),
            structured: g.structured.unwrap_or(false),
            min_passes: self.expansion.effective_min_passes(),
        }
    }

    /// Take every key `upper` sets.
    pub fn overlay(&mut self, upper: &AltTxtConfig) {
        self.generation.overlay(&upper.generation);
        self.expansion.overlay(&upper.expansion);
    }

    /// Apply command-line flags on top of an already loaded config.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        self.overlay(&AltTxtConfig::from(cli));
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        parse(&text, &path.display().to_string())
    }

    /// `ALTTXT_LEVEL`, `ALTTXT_VERBOSITY`, `ALTTXT_EXPLAIN`,
    /// `ALTTXT_STRUCTURED` and `ALTTXT_MIN_PASSES`.
    fn from_env() -> Self {
        Self {
            generation: GenerationConfig {
                level: env_value("LEVEL"),
                verbosity: env_value("VERBOSITY"),
                explain: env_value("EXPLAIN"),
                structured: env_value("STRUCTURED"),
            },
            expansion: ExpansionConfig {
                min_passes: env_value("MIN_PASSES"),
            },
        }
    }
}

fn parse(text: &str, origin: &str) -> Result<AltTxtConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::Malformed {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".alttxt").join("config.toml"))
}

/// Unparseable values are ignored with a warning.
fn env_value<T: FromStr>(suffix: &str) -> Option<T> {
    let key = format!("{ENV_PREFIX}{suffix}");
    let raw = std::env::var(&key).ok()?;
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        tracing::warn!(%key, value = %raw, "ignoring unparseable environment override");
    }
    parsed
}
