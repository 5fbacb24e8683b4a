//! Error types for wallet core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and decides which ones are recoverable.

use thiserror::Error;

/// Result type alias for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Core error type for wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Invalid user-supplied field value
    #[error("{0}")]
    Validation(String),

    /// Index-addressed access past the end of the ledger or file
    #[error("No such record: index {index} (ledger has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed stored file
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WalletError {
    /// True for errors caused by user input rather than persistence.
    ///
    /// Callers use this to keep bad input (retry with different values)
    /// apart from I/O failures (retry the save, or report and continue).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WalletError::Validation(_) | WalletError::IndexOutOfRange { .. }
        )
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(WalletError::Validation("bad".into()).is_validation());
        assert!(WalletError::IndexOutOfRange { index: 3, len: 1 }.is_validation());
        assert!(!WalletError::Storage("disk full".into()).is_validation());
        assert!(!WalletError::Parse {
            line: 2,
            message: "x".into()
        }
        .is_validation());
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: WalletError = io.into();
        assert!(matches!(err, WalletError::Storage(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_index_message_mentions_record() {
        let err = WalletError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "No such record: index 5 (ledger has 2 records)"
        );
    }
}
