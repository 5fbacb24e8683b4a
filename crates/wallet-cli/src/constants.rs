//! Constants used throughout the CLI.

/// Data file used when neither `--file`, `WALLET_FILE`, nor the config names one.
pub const DEFAULT_DATA_FILE: &str = "data.txt";

/// Environment variable holding the tracing filter (e.g. `debug`, `wallet_core=trace`).
pub const LOG_ENV: &str = "WALLET_LOG";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config file named explicitly).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Reading or writing the data file failed.
    pub const STORAGE_FAILED: i32 = 5;

    /// The data file exists but is not in the expected block format.
    pub const INTEGRITY_FAILED: i32 = 6;
}
