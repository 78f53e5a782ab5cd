//! Application services.

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldOutcome, ScaffoldService, Settings, SUBMODULE_DIR};
