//! Template context and generated-file value types.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be **relative**.
///
/// Generated files must never carry absolute paths: they are always
/// resolved against the destination root. `RelativePath` is a semantic
/// guardrail, not a filesystem abstraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the provided path is absolute. Paths here come from the
    /// compiled-in file plan, never from user input.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {path:?}"
        );
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// The finalized key-value mapping supplied to rendering.
///
/// Assembled once, before any template is rendered; there is no partial
/// or streaming mutation after assembly. A `BTreeMap` keeps iteration
/// (and therefore any diagnostics) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, used only during assembly.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Look up a key. `None` means the key was never assembled, which the
    /// renderer turns into a `MissingContextKey` error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Conditional-block truthiness: present and non-empty.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// A relative path plus fully rendered content. Write-once: generated
/// files are never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: RelativePath,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_accepts_relative() {
        let p = RelativePath::new("lib/hello.ex");
        assert_eq!(p.as_path(), Path::new("lib/hello.ex"));
    }

    #[test]
    #[should_panic]
    fn relative_path_rejects_absolute() {
        RelativePath::new("/etc/passwd");
    }

    #[test]
    fn context_lookup_and_truthiness() {
        let ctx = TemplateContext::new()
            .with("app", "hello_world")
            .with("umbrella", "");
        assert_eq!(ctx.get("app"), Some("hello_world"));
        assert_eq!(ctx.get("missing"), None);
        assert!(ctx.is_truthy("app"));
        assert!(!ctx.is_truthy("umbrella"));
        assert!(!ctx.is_truthy("missing"));
    }
}
