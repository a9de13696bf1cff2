use anyhow::{bail, Context, Result};
use ruleapi::{WsConfig, DEFAULT_URL};
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf, time::Duration};
use tracing::debug;

use crate::args::CommonArgs;

#[cfg(windows)]
pub fn config_dir() -> PathBuf {
    std::env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("tortuga")
}

#[cfg(not(windows))]
pub fn config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".config")
        .join("tortuga")
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// `[ws]` table of the config file. Every key is optional.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WsSection {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify: Option<bool>,
    pub timeout: Option<u64>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ws: WsSection,
}

/// Reads the config file at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return Ok(Config::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

/// Loads the config file selected by `--config`/`TORTUGA_CONFIG`, or the
/// default one. An explicitly named file must exist.
pub fn load_selected_config(args: &CommonArgs) -> Result<Config> {
    match &args.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            load_config(path)
        }
        None => load_config(&default_config_path()),
    }
}

/// Merges command-line/environment values over the config file and defaults.
pub fn resolve_ws_config(args: &CommonArgs, config: &Config) -> WsConfig {
    let ws = &config.ws;
    WsConfig {
        url: args
            .url
            .clone()
            .or_else(|| ws.url.clone())
            .unwrap_or_else(|| DEFAULT_URL.to_string()),
        username: args.username.clone().or_else(|| ws.username.clone()),
        password: args.password.clone().or_else(|| ws.password.clone()),
        verify: !args.no_verify && ws.verify.unwrap_or(true),
        timeout: args.timeout.or(ws.timeout).map(Duration::from_secs),
    }
}
