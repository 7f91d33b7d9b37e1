//! AltTxtErrorCode trait and error code constants.

/// Which side of the boundary an error belongs to.
///
/// `Input` errors come from malformed or inconsistent plot data and config.
/// `Programming` errors mean the engine's own tables are inconsistent and
/// should abort rather than degrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    Programming,
}

/// Every error enum implements this to expose a stable code string
/// for wrappers (CLI, web service) that report errors to users.
pub trait AltTxtErrorCode {
    /// Returns the error code string (e.g., "MODEL_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns whether the error was caused by input or by the engine itself.
    fn error_class(&self) -> ErrorClass;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const TOKEN_ERROR: &str = "TOKEN_ERROR";
pub const TEMPLATE_CYCLE: &str = "TEMPLATE_CYCLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
