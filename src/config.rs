use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};
use crate::models::AuthType;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Env var pointing at an alternative config file
pub const CONFIG_PATH_VAR: &str = "SMS_SEND_CONFIG";
pub const ENDPOINT_VAR: &str = "SMS_SEND_ENDPOINT";
pub const FROM_NUMBER_VAR: &str = "SMS_SEND_FROM_NUMBER";
pub const TOKEN_VAR: &str = "SMS_SEND_TOKEN";

/// Gateway settings, read once at startup
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint exposing the `debugSendSMS` mutation
    pub endpoint: String,
    /// Default sender number, with its leading `+`
    pub from_number: String,
    pub auth: AuthType,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::from(DEFAULT_ENDPOINT),
            from_number: String::new(),
            auth: AuthType::None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// `~/.sms-send/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from the file named by `SMS_SEND_CONFIG` (or the default path),
    /// then apply env overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);

        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from a YAML file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in `load`)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(from_number) = lookup(FROM_NUMBER_VAR) {
            self.from_number = from_number;
        }
        if let Some(token) = lookup(TOKEN_VAR).filter(|v| !v.is_empty()) {
            self.auth = AuthType::Bearer { token };
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
