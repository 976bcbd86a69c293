//! Error types for the reductions core

use thiserror::Error;

/// Main error type for reductions operations
#[derive(Debug, Error)]
pub enum ReductionsError {
    /// A grouping feature carried an intrinsic name that is not a string
    #[error("Series name must be a string. Value '{value}' was of type {type_name}")]
    InvalidFeatureName {
        value: String,
        type_name: &'static str,
    },

    /// `load_data` was called on a moment that already holds data
    #[error("data can be loaded only once")]
    AlreadyLoaded,

    /// A loaded-data accessor was used before `load_data`
    #[error("data has not been loaded")]
    NotLoaded,

    /// The moment does not implement this operation
    #[error("{operation} is not implemented for this moment")]
    NotImplemented { operation: &'static str },

    /// Two aligned collections disagree on their number of rows
    #[error("{context}: expected {expected} rows, found {found}")]
    InconsistentLength {
        context: String,
        expected: usize,
        found: usize,
    },

    /// Input data was rejected
    #[error("{0}")]
    Validation(String),

    /// A constraint vector was built with a repeated component label
    #[error("duplicate constraint label '{0}'")]
    DuplicateLabel(String),
}

impl ReductionsError {
    pub(crate) fn length(context: impl Into<String>, expected: usize, found: usize) -> Self {
        ReductionsError::InconsistentLength {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Returns true if this error is the unimplemented-operation signal.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ReductionsError::NotImplemented { .. })
    }
}

/// Result type alias for reductions operations
pub type Result<T> = std::result::Result<T, ReductionsError>;
