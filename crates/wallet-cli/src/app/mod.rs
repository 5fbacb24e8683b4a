//! Application-level utilities for the Wallet CLI.
//!
//! This module provides:
//! - Path resolution for config and data files
//! - Lazily loaded configuration bundled with CLI arguments

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
