//! Configuration loading and hosts path resolution.
//!
//! Supports HOSTY_HOME and HOSTY_HOSTS_FILE env var overrides for testing.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::platform::default_hosts_path;

/// Overrides every other source of the hosts file path.
pub const HOSTS_FILE_ENV: &str = "HOSTY_HOSTS_FILE";

/// Overrides the directory holding config.toml.
pub const HOME_ENV: &str = "HOSTY_HOME";

/// config.toml structure.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hosts_file: Option<PathBuf>,
}

/// Directory holding config.toml (respects HOSTY_HOME).
pub fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var(HOME_ENV) {
        PathBuf::from(home)
    } else if let Some(dirs) = directories::ProjectDirs::from("", "", "hosty") {
        dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".hosty")
    }
}

/// Path to config.toml (respects HOSTY_HOME).
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl Config {
    /// Load config (with shared lock when file exists); defaults if absent.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.is_file() {
            return Ok(Config::default());
        }
        let mut file = fs::OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("open config: {}", path.display()))?;
        fs2::FileExt::lock_shared(&file)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;
        let cfg: Config =
            toml::from_str(&s).with_context(|| format!("parse config: {}", path.display()))?;
        Ok(cfg)
    }
}

/// Hosts file to edit: HOSTY_HOSTS_FILE, then config, then platform default.
pub fn resolve_hosts_file(config: &Config) -> PathBuf {
    if let Some(path) = std::env::var_os(HOSTS_FILE_ENV) {
        return PathBuf::from(path);
    }
    config
        .hosts_file
        .clone()
        .unwrap_or_else(default_hosts_path)
}
