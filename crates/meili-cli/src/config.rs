//! CLI configuration

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Server address used when neither the flag nor the file sets one
pub const DEFAULT_HOST: &str = "http://localhost:7700";

/// Path of the config file, `$MEILI_CONFIG` first
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os("MEILI_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("meili")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub poll_interval_ms: u64,
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_key: None,
            poll_interval_ms: 50,
            timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Load the config file; defaults only when the file does not exist yet
    pub fn try_load() -> anyhow::Result<Self> {
        let path = config_file_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["host", "api_key", "poll_interval_ms", "timeout_ms"]
    }

    /// Value of a key, `None` for unknown keys and an unset api key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "host" => Some(self.host.clone()),
            "api_key" => self.api_key.clone(),
            "poll_interval_ms" => Some(self.poll_interval_ms.to_string()),
            "timeout_ms" => Some(self.timeout_ms.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "host" => {
                anyhow::ensure!(
                    value.starts_with("http://") || value.starts_with("https://"),
                    "host must start with http:// or https://"
                );
                self.host = value.trim_end_matches('/').to_string();
            }
            "api_key" => {
                self.api_key = (!value.is_empty()).then(|| value.to_string());
            }
            "poll_interval_ms" => self.poll_interval_ms = parse_millis(key, value)?,
            "timeout_ms" => self.timeout_ms = parse_millis(key, value)?,
            _ => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}

fn parse_millis(key: &str, value: &str) -> anyhow::Result<u64> {
    let millis: u64 = value
        .parse()
        .with_context(|| format!("{} must be a whole number of milliseconds", key))?;
    anyhow::ensure!(millis > 0, "{} must be positive", key);
    Ok(millis)
}
