//! # exforge-core
//!
//! Application core for the exforge scaffold generator: domain value
//! types (names, versions, git references, contexts), the scaffold
//! controller, and the outgoing port traits that the `exforge-adapters`
//! crate implements.
//!
//! This crate performs no I/O of its own. Every external effect (the
//! name registry, the `git` binary, the filesystem, the template
//! catalog and renderer) enters through a trait in
//! [`application::ports`], which keeps the whole generation flow
//! testable with fakes.

pub mod application;
pub mod domain;
pub mod error;

pub use application::{ScaffoldOutcome, ScaffoldService, Settings};
pub use domain::{AppName, GitOptions, ModuleName, ScaffoldRequest};
pub use error::{ExforgeError, ExforgeResult};
