//! Configuration errors.

use super::error_code::{self, AltTxtErrorCode, ErrorClass};

/// Errors raised while loading, validating, or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed config {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("{field} is out of range: {message}")]
    OutOfRange { field: String, message: String },

    #[error("Unknown {field} value: {message}")]
    UnknownVariant { field: String, message: String },

    #[error("Cannot serialize config: {message}")]
    Serialize { message: String },
}

impl AltTxtErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }

    fn error_class(&self) -> ErrorClass {
        ErrorClass::Input
    }
}
