//! Token registry errors.

use super::error_code::{self, AltTxtErrorCode, ErrorClass};

/// Errors raised while building the token table. All of them are
/// programming errors: the registry is populated by the engine itself.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token {name} is registered twice")]
    Duplicate { name: String },

    #[error("Token {name} has an unrepresentable literal: {value}")]
    InvalidLiteral { name: String, value: String },
}

impl AltTxtErrorCode for TokenError {
    fn error_code(&self) -> &'static str {
        error_code::TOKEN_ERROR
    }

    fn error_class(&self) -> ErrorClass {
        ErrorClass::Programming
    }
}
