//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use wallet_core::WalletError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file, data file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Data file could not be read or written
    Storage(String),

    /// Data file is malformed
    Integrity { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::Integrity { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) | CliError::Storage(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<WalletError> for CliError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::Validation(_) | WalletError::IndexOutOfRange { .. } => {
                CliError::InvalidInput(err.to_string())
            }
            WalletError::Parse { .. } => CliError::Integrity {
                message: format!("Data file is malformed. {}", err),
                hint: "Hint: Each record must be four labeled lines (Date, Category, Amount, Description) followed by a blank line.".to_string(),
            },
            WalletError::Storage(message) => CliError::Storage(message),
        }
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Storage(_) => exit_codes::STORAGE_FAILED,
            CliError::Integrity { .. } => exit_codes::INTEGRITY_FAILED,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

/// Exit code for any error reaching `main`.
///
/// Typed errors carry their own code; anything else is a general failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(wallet_err) = err.downcast_ref::<WalletError>() {
        return match wallet_err {
            WalletError::Validation(_) | WalletError::IndexOutOfRange { .. } => {
                exit_codes::INVALID_INPUT
            }
            WalletError::Parse { .. } => exit_codes::INTEGRITY_FAILED,
            WalletError::Storage(_) => exit_codes::STORAGE_FAILED,
        };
    }
    1
}
