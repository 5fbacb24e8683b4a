//! Application context for the Wallet CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use wallet_core::storage::{RecordStore, TextStore};
use wallet_core::Ledger;

use crate::cli::Cli;
use crate::config::WalletConfig;
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_data_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<WalletConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&WalletConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// The data file for this session.
    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_data_path(self.cli, self.config()?))
    }

    /// Open the data file and load every record into a ledger.
    ///
    /// Load failures are fatal: a malformed file is never silently replaced.
    pub fn open_ledger(&self) -> anyhow::Result<(Ledger, TextStore)> {
        let store = TextStore::new(self.data_path()?);
        let records = store.load().map_err(CliError::from)?;
        debug!(path = %store.path().display(), count = records.len(), "Opened ledger");
        Ok((Ledger::from_records(records), store))
    }

    /// Build a UI context for output.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }

    /// True when the menu runs on a real terminal (clear screen, pause prompts).
    pub fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}
