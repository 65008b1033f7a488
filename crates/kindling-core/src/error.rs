//! Unified error handling for Kindling Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Kindling Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// kindling-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum KindlingError {
    /// Errors from the domain layer (business logic violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KindlingError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Kindling".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    /// An external tool (generator, package manager, git) failed.
    External,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type KindlingResult<T> = Result<T, KindlingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_category() {
        let err: KindlingError = DomainError::InvalidProjectName {
            name: ".x".into(),
            reason: "leading dot".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn command_failures_are_external() {
        let err: KindlingError = ApplicationError::CommandFailed {
            command: "npm install".into(),
            status: 1,
            stderr: String::new(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::External);
    }

    #[test]
    fn suggestions_are_never_empty() {
        let err: KindlingError = ApplicationError::StagedListUnavailable {
            reason: "no repo".into(),
        }
        .into();
        assert!(!err.suggestions().is_empty());
    }
}
