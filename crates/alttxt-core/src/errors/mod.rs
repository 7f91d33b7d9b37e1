//! Error handling for the alt-text engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod grammar_error;
pub mod model_error;
pub mod narrative_error;
pub mod token_error;

pub use config_error::ConfigError;
pub use error_code::{AltTxtErrorCode, ErrorClass};
pub use grammar_error::{ExpansionPhase, GrammarError};
pub use model_error::ModelError;
pub use narrative_error::NarrativeError;
pub use token_error::TokenError;
