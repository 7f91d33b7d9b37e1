//! Top-level error for a generation run.

use super::error_code::{AltTxtErrorCode, ErrorClass};
use super::{ConfigError, GrammarError, ModelError, TokenError};

/// Errors that can occur while turning plot models into alt text.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AltTxtErrorCode for NarrativeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            Self::Token(e) => e.error_code(),
            Self::Grammar(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }

    fn error_class(&self) -> ErrorClass {
        match self {
            Self::Model(e) => e.error_class(),
            Self::Token(e) => e.error_class(),
            Self::Grammar(e) => e.error_class(),
            Self::Config(e) => e.error_class(),
        }
    }
}
