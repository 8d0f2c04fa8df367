//! Error handling for the validation engine
//!
//! Only configuration and rendering mistakes are errors. A field that fails a
//! rule is reported as a [`Violation`](crate::Violation) inside a
//! [`ValidationResult`](crate::ValidationResult), never through this type.

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by registration, validation setup and rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A rule with the same name is already registered
    #[error("Rule '{0}' is already registered")]
    DuplicateRule(String),

    /// A constraint references a rule that was never registered
    #[error("Rule '{0}' is not registered")]
    UnknownRule(String),

    /// A message was requested for a result without violations
    #[error("Validation result contains no violations")]
    EmptyResult,
}

impl EngineError {
    /// Returns true if the rule set and the constraint specs are out of sync
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EngineError::DuplicateRule(_) | EngineError::UnknownRule(_)
        )
    }
}
