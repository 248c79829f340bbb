//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.

mod validate;

pub use validate::{run_validate, run_with_fetcher};

// Re-export config types used by handlers
pub use crate::config::ValidatorConfig;
