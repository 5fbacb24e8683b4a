//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying records
//! and balances in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{balance_json, records_json};
pub use text::{balance_lines, record_lines, records_table};
