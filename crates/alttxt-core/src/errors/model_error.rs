//! Model construction errors.

use super::error_code::{self, AltTxtErrorCode, ErrorClass};

/// Invariant violations detected while building a `DataModel`.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Set {name} is listed more than once")]
    DuplicateSet { name: String },

    #[error("Size table does not match set list: {message}")]
    SizeMismatch { message: String },

    #[error("Subset {name} has degree {degree}, but only {set_count} sets exist")]
    DegreeOutOfRange {
        name: String,
        degree: u32,
        set_count: usize,
    },

    #[error("Subset {name} has a deviation that is not a finite number")]
    NonFiniteDeviation { name: String },

    #[error("Visible subset {name} is missing from the unfiltered subset list")]
    UnknownVisibleSubset { name: String },

    #[error("Subset {name} was classified against {classified_with} sets, model has {set_count}")]
    ClassificationMismatch {
        name: String,
        classified_with: usize,
        set_count: usize,
    },
}

impl AltTxtErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }

    fn error_class(&self) -> ErrorClass {
        ErrorClass::Input
    }
}
