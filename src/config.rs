//! Relay configuration
//!
//! Values come from an optional TOML file, then from the environment
//! (`.env` included). Environment values win.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RelayError, Result};
use crate::message::BotProfile;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_CONFIG_PATH: &str = "relay_config.toml";

pub const ENV_CONFIG_PATH: &str = "RELAY_CONFIG";
pub const ENV_WEBHOOK_SECRET: &str = "GITLAB_WEBHOOK_SECRET";
pub const ENV_MATTERMOST_URL: &str = "MATTERMOST_LINK";
pub const ENV_BIND_ADDRESS: &str = "BIND_ADDRESS";
pub const ENV_LOG_DIR: &str = "LOG_DIR";

/// Shape of the TOML file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub webhook_secret: Option<String>,
    pub mattermost_url: Option<String>,
    pub bind_address: Option<String>,
    pub log_dir: Option<PathBuf>,
    #[serde(default)]
    pub bot: BotProfile,
}

impl FileConfig {
    /// Reads the file if it exists. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config_str = fs::read_to_string(path).map_err(|e| {
            RelayError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = toml::from_str(&config_str)?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub webhook_secret: String,
    pub mattermost_url: String,
    pub bind_address: String,
    pub log_dir: Option<PathBuf>,
    pub bot: BotProfile,
}

impl RelayConfig {
    /// Layers `env` over `file` and validates the result
    pub fn resolve<F>(file: FileConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let webhook_secret = non_empty(ENV_WEBHOOK_SECRET)
            .or(file.webhook_secret)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                RelayError::Config(format!(
                    "{} must be set to a non-empty value",
                    ENV_WEBHOOK_SECRET
                ))
            })?;
        let mattermost_url = non_empty(ENV_MATTERMOST_URL)
            .or(file.mattermost_url)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                RelayError::Config(format!(
                    "{} must be set to a non-empty value",
                    ENV_MATTERMOST_URL
                ))
            })?;
        let bind_address = non_empty(ENV_BIND_ADDRESS)
            .or(file.bind_address)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let log_dir = non_empty(ENV_LOG_DIR).map(PathBuf::from).or(file.log_dir);

        Ok(Self {
            webhook_secret,
            mattermost_url,
            bind_address,
            log_dir,
            bot: file.bot,
        })
    }

    /// Loads `.env`, the config file named by `RELAY_CONFIG`, then the
    /// process environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file = FileConfig::load(Path::new(&path))?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }
}
