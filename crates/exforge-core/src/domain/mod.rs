//! Domain layer: pure value types and derivations.
//!
//! Everything here is synchronous, allocation-light, and free of I/O.
//! Identifier validation, version shortening, and git-URL directory
//! derivation are total functions over their inputs; the only external
//! question the domain ever asks ("is this module name taken?") goes
//! through the [`crate::application::ports::NameRegistry`] port.

pub mod context;
pub mod error;
pub mod git_ref;
pub mod identifiers;
pub mod request;
pub mod version;

pub use context::{GeneratedFile, RelativePath, TemplateContext};
pub use error::{DomainError, ErrorCategory};
pub use git_ref::{GitRepoRef, RepoRole};
pub use identifiers::{AppName, ModuleName};
pub use request::{GitOptions, ScaffoldRequest};
pub use version::short_version;
