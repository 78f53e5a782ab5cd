//! # exforge-adapters
//!
//! Infrastructure implementations of the `exforge-core` ports:
//!
//! - [`catalog::EmbeddedCatalog`]: the compiled-in template catalog
//! - [`renderer::StrictRenderer`]: `{{key}}` interpolation and
//!   `{{#key}}...{{/key}}` conditionals, strict about missing keys
//! - [`filesystem::LocalFilesystem`] / [`filesystem::MemoryFilesystem`]
//! - [`git::SystemGit`]: `git ls-remote` / `git clone` via the binary
//! - [`registry::ElixirRegistry`] / [`registry::MemoryRegistry`]

pub mod catalog;
pub mod filesystem;
pub mod git;
pub mod registry;
pub mod renderer;

pub use catalog::EmbeddedCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use git::SystemGit;
pub use registry::{ElixirRegistry, MemoryRegistry};
pub use renderer::StrictRenderer;
