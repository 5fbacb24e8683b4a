//! # Wallet Core
//!
//! Core library for Wallet - a personal income and expense ledger kept in a
//! plain, human-readable text file.
//!
//! This crate provides the domain model, the in-memory ledger, and the
//! storage layer, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **record**: `Record`, `Category`, and the field parsers used for validation
//! - **ledger**: In-memory ordered records, balance, and search
//! - **storage**: `RecordStore` trait and the text-file implementation
//! - **fs**: Atomic file replacement

pub mod error;
pub mod fs;
pub mod ledger;
pub mod record;
pub mod storage;

pub use error::{Result, WalletError};
pub use ledger::{Balance, Ledger, SearchQuery};
pub use record::{Category, Record};
pub use storage::{RecordStore, TextStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
