//! Unified error handling for the exforge core.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
///
/// Wraps the layer errors so adapters and the CLI handle a single type.
/// Every variant is fatal for the current invocation: nothing is retried
/// and nothing is recovered locally (see the non-transactional design
/// notes in DESIGN.md).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExforgeError {
    /// Business-rule violations (names, versions, URLs).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures (git, templates, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ExforgeError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Coarse category for display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => match e {
                ApplicationError::UnreachableGitRemote { .. }
                | ApplicationError::CloneFailed { .. } => ErrorCategory::External,
                ApplicationError::UnknownTemplate { .. }
                | ApplicationError::MissingContextKey { .. } => ErrorCategory::Internal,
                ApplicationError::Filesystem { .. } => ErrorCategory::External,
            },
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
    External,
    Internal,
}

/// Convenient result type alias.
pub type ExforgeResult<T> = Result<T, ExforgeError>;
