//! Application and module identifiers.
//!
//! These are pure value types with equality-by-value and no identity.
//! Validation happens at construction; once you hold an [`AppName`] or a
//! [`ModuleName`], it is well-formed.
//!
//! # Naming rules
//!
//! - Application names match `^[a-z][a-zA-Z0-9_]*$` (`hello_world`).
//! - Module names are dot-separated segments, each matching
//!   `^[A-Z][a-zA-Z0-9_]*$` (`HelloWorld`, `Acme.Gateway`).

use std::fmt;

use crate::domain::error::DomainError;

// ── AppName ───────────────────────────────────────────────────────────────────

/// A validated application name: lowercase, underscore-delimited.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    /// Derive the application name from the target path, or validate an
    /// explicit override.
    ///
    /// With no override, the final `/`-delimited path segment is used and
    /// the resulting error (if any) carries `from_path = true` so the CLI
    /// can hint at `--app`.
    pub fn derive(path: &str, explicit: Option<&str>) -> Result<Self, DomainError> {
        match explicit {
            Some(name) => Self::validated(name, false),
            None => Self::validated(last_segment(path), true),
        }
    }

    fn validated(name: &str, from_path: bool) -> Result<Self, DomainError> {
        if is_app_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(DomainError::InvalidApplicationName {
                name: name.to_string(),
                from_path,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Underscore-delimited → PascalCase: `hello_world` → `HelloWorld`.
    pub fn camelize(&self) -> String {
        self.0
            .split('_')
            .filter(|seg| !seg.is_empty())
            .map(|seg| {
                let mut chars = seg.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── ModuleName ────────────────────────────────────────────────────────────────

/// A validated module name: dot-separated PascalCase segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Camelize the application name, or validate an explicit override.
    ///
    /// Camelized names are valid by construction (the app-name pattern
    /// guarantees each underscore-delimited segment starts with a letter),
    /// but the result is still checked to keep a single source of truth.
    pub fn derive(app: &AppName, explicit: Option<&str>) -> Result<Self, DomainError> {
        let candidate = match explicit {
            Some(name) => name.to_string(),
            None => app.camelize(),
        };
        if is_module_name(&candidate) {
            Ok(Self(candidate))
        } else {
            Err(DomainError::InvalidModuleName { name: candidate })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first dot-separated segment: the top-level name the module
    /// would occupy in the target namespace.
    pub fn top_level(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Pattern helpers ───────────────────────────────────────────────────────────

fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

fn is_app_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_module_segment(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_module_name(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_module_segment)
}
