//! UI primitives for the Wallet CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, color styles
//! - **Render**: Tables, headers, key-value lines, hints, errors
//! - **Format**: String utilities (truncate, digit grouping)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, error_message, header, hint, kv, success, table};
