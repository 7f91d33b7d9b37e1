//! Template expansion errors.

use super::error_code::{self, AltTxtErrorCode, ErrorClass};

/// The expansion phase that was running when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionPhase {
    NonTerminal,
    Terminal,
}

impl ExpansionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NonTerminal => "non-terminal",
            Self::Terminal => "terminal",
        }
    }
}

impl std::fmt::Display for ExpansionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while expanding templates.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("Template did not converge in {phase} phase after {passes} passes (last symbol: {symbol})")]
    TemplateCycle {
        phase: ExpansionPhase,
        passes: usize,
        symbol: String,
    },
}

impl AltTxtErrorCode for GrammarError {
    fn error_code(&self) -> &'static str {
        error_code::TEMPLATE_CYCLE
    }

    fn error_class(&self) -> ErrorClass {
        ErrorClass::Programming
    }
}
