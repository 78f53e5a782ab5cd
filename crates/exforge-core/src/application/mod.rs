//! Application layer: orchestration, ports, and their errors.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{ScaffoldOutcome, ScaffoldService, Settings, SUBMODULE_DIR};
