//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod build;

// Re-export main command functions
pub use build::{execute_build, validate_args, BuildArgs};
