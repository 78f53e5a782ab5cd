//! Domain-layer errors: name validation, version parsing, URL derivation.
//!
//! All errors are:
//! - Cloneable (safe to hand to the CLI layer for formatting)
//! - Categorizable (for display styling)
//! - Actionable (provide suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The application name does not match `^[a-z][a-zA-Z0-9_]*$`.
    ///
    /// `from_path` records whether the name was inferred from the target
    /// path rather than passed explicitly; the message differs so the user
    /// is pointed at `--app` in the inferred case.
    #[error("invalid application name '{name}'")]
    InvalidApplicationName { name: String, from_path: bool },

    /// The module name is not a dot-separated sequence of segments each
    /// matching `^[A-Z][a-zA-Z0-9_]*$`.
    #[error("invalid module name '{name}'")]
    InvalidModuleName { name: String },

    /// A top-level name already exists under this module identifier.
    #[error("module name '{name}' is already taken")]
    ModuleNameTaken { name: String },

    /// The configured toolchain version is not `major.minor.patch[-pre]`.
    #[error("could not parse version '{input}'")]
    VersionParse { input: String },

    /// A git URL does not end in a `/<name>.git` path segment.
    #[error("malformed git URL '{url}': expected a trailing '/<name>.git' segment")]
    MalformedGitUrl { url: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidApplicationName { name, from_path } => {
                let mut s = vec![
                    format!("Application name '{name}' must start with a lowercase letter"),
                    "Use lowercase letters, digits, and underscores: my_app, hello_world".into(),
                ];
                if *from_path {
                    s.push("The name was inferred from the path; pass --app to override".into());
                }
                s
            }
            Self::InvalidModuleName { name } => vec![
                format!("Module name '{name}' must be dot-separated PascalCase segments"),
                "Examples: MyApp, MyApp.Web, Acme.Gateway".into(),
            ],
            Self::ModuleNameTaken { name } => vec![
                format!("'{name}' already denotes a top-level name"),
                "Pass --module to pick a different module name".into(),
            ],
            Self::VersionParse { input } => vec![
                format!("'{input}' is not a semantic version"),
                "Set elixir.version to major.minor.patch, e.g. 1.4.0".into(),
            ],
            Self::MalformedGitUrl { url } => vec![
                format!("'{url}' has no '/<name>.git' tail to derive a directory from"),
                "Example: git@github.com:acme/my_app.git".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidApplicationName { .. }
            | Self::InvalidModuleName { .. }
            | Self::VersionParse { .. } => ErrorCategory::Validation,
            Self::ModuleNameTaken { .. } => ErrorCategory::Conflict,
            Self::MalformedGitUrl { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
}
