//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffold service needs from the outside
//! world. The `exforge-adapters` crate provides the production
//! implementations; tests substitute mocks or in-memory fakes.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::TemplateContext;
use crate::error::ExforgeResult;

/// Port answering "does a top-level name already exist?" in the target
/// namespace.
///
/// Implemented by:
/// - `exforge_adapters::registry::ElixirRegistry` (reserved stdlib names)
/// - `exforge_adapters::registry::MemoryRegistry` (testing)
#[cfg_attr(test, automock)]
pub trait NameRegistry: Send + Sync {
    /// Whether `name` (a top-level namespace segment) is already in use.
    fn exists(&self, name: &str) -> bool;
}

/// Port for the version-control binary.
///
/// Both operations are blocking; the service waits for completion. No
/// timeouts, no retries: a failure is terminal for the run.
///
/// Implemented by:
/// - `exforge_adapters::git::SystemGit` (shells out to `git`)
#[cfg_attr(test, automock)]
pub trait Git: Send + Sync {
    /// Probe remote reachability with `git ls-remote <url>`.
    /// Err is `ApplicationError::UnreachableGitRemote`.
    fn ls_remote(&self, url: &str) -> ExforgeResult<()>;

    /// `git clone <url> [dir]` inside `cwd`.
    /// Err is `ApplicationError::CloneFailed`.
    fn clone_repo<'a>(&self, url: &str, dir: Option<&'a str>, cwd: &Path) -> ExforgeResult<()>;
}

/// Port for filesystem effects.
///
/// Directory creation is idempotent; file writes are write-once from the
/// caller's point of view (the service never rewrites a generated file).
///
/// Implemented by:
/// - `exforge_adapters::filesystem::LocalFilesystem` (production)
/// - `exforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ExforgeResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ExforgeResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port over the fixed, compiled-in template catalog.
///
/// Implemented by `exforge_adapters::catalog::EmbeddedCatalog`.
#[cfg_attr(test, automock)]
pub trait TemplateCatalog: Send + Sync {
    /// The template source for `id`, or `None` if the id is unknown
    /// (which the service reports as `UnknownTemplate`). Sources are
    /// compiled in, hence `'static`.
    fn source(&self, id: &str) -> Option<&'static str>;
}

/// Port for rendering one template source against a context.
///
/// Rendering must be pure and deterministic: same source + same context
/// produce byte-identical output.
///
/// Implemented by `exforge_adapters::renderer::StrictRenderer`.
#[cfg_attr(test, automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source`, reporting `MissingContextKey` (tagged with
    /// `template_id`) for any referenced key absent from `context`.
    fn render(
        &self,
        template_id: &str,
        source: &str,
        context: &TemplateContext,
    ) -> ExforgeResult<String>;
}
