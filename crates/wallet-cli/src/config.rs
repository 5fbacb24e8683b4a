use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Optional user configuration, read from `config.toml`.
///
/// ```toml
/// [data]
/// path = "/home/me/finance/data.txt"
///
/// [ui]
/// clear_screen = false
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    /// Clear the terminal before drawing the menu
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            clear_screen: default_clear_screen(),
        }
    }
}

fn default_clear_screen() -> bool {
    true
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<WalletConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("wallet"));
        }
    }
    Ok(home_dir()?.join(".config").join("wallet"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
