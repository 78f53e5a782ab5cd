//! Application layer errors.
//!
//! These represent orchestration failures: external commands, template
//! lookup and rendering, filesystem writes. Business-rule violations are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while orchestrating a scaffold run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// `git ls-remote` against the URL did not complete successfully.
    /// Carries the raw diagnostic output of the command.
    #[error("git remote '{url}' is unreachable")]
    UnreachableGitRemote { url: String, diagnostics: String },

    /// `git clone` exited non-zero.
    #[error("cloning '{url}' failed")]
    CloneFailed { url: String, diagnostics: String },

    /// A template id was requested that the compiled-in catalog does not
    /// contain. Always a programming error in the file plan.
    #[error("unknown template '{id}'")]
    UnknownTemplate { id: String },

    /// A template referenced a context key that was never assembled.
    /// Strictness is deliberate: silently-empty interpolation would hide
    /// context-assembly bugs.
    #[error("template '{template}' references missing context key '{key}'")]
    MissingContextKey { template: String, key: String },

    /// A directory creation or file write failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnreachableGitRemote { url, diagnostics } => vec![
                format!("Could not reach '{url}'"),
                "Check the URL, your network, and your SSH credentials".into(),
                format!("git said: {}", diagnostics.trim()),
            ],
            Self::CloneFailed { url, diagnostics } => vec![
                format!("Cloning '{url}' failed"),
                format!("git said: {}", diagnostics.trim()),
                "Files written before the failure are left in place".into(),
            ],
            Self::UnknownTemplate { id } => vec![
                format!("No template '{id}' in the embedded catalog"),
                "This is a bug in exforge; please report it".into(),
            ],
            Self::MissingContextKey { key, .. } => vec![
                format!("The context was assembled without '{key}'"),
                "This is a bug in exforge; please report it".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write {}", path.display()),
                "Check permissions on the destination directory".into(),
            ],
        }
    }
}
