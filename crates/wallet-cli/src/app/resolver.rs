//! Path resolution for config and data files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, WalletConfig};
use crate::constants::DEFAULT_DATA_FILE;
use crate::errors::CliError;

/// Config file location, and whether the user named it explicitly.
pub struct ConfigLocation {
    pub path: PathBuf,
    pub explicit: bool,
}

/// Resolve the config file path, checking WALLET_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<ConfigLocation> {
    if let Ok(value) = std::env::var("WALLET_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(ConfigLocation {
                path: PathBuf::from(value),
                explicit: true,
            });
        }
    }
    Ok(ConfigLocation {
        path: default_config_path()?,
        explicit: false,
    })
}

/// Load the config file.
///
/// A missing default config yields defaults; a missing config that was named
/// through WALLET_CONFIG is an error.
pub fn load_config() -> anyhow::Result<WalletConfig> {
    let location = match resolve_config_path() {
        Ok(location) => location,
        // No HOME and no override: nothing to read.
        Err(_) => return Ok(WalletConfig::default()),
    };
    if !location.path.exists() {
        if location.explicit {
            return Err(CliError::not_found(
                missing_config_message(&location.path),
                "Hint: Unset WALLET_CONFIG or create the file.",
            )
            .into());
        }
        return Ok(WalletConfig::default());
    }
    read_config(&location.path)
}

/// Resolve the data file: `--file`/WALLET_FILE, then config, then `data.txt`.
pub fn resolve_data_path(cli: &Cli, config: &WalletConfig) -> PathBuf {
    if let Some(path) = cli.file.clone() {
        return path;
    }
    if let Some(path) = config.data.path.as_deref() {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Error message when an explicitly named config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("No config file found at {}", config_path.display())
}
