use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Origin the client talks to when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const DEFAULT_TIMEOUT_SECS: u64 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub client: ClientConfig,
}

/// Settings for the feed client.
///
/// The defaults encode the fixed production behavior: the feed origin, a
/// 3 second per-attempt timeout, and a flat 1 second delay between retries
/// (no backoff). Overrides exist for composition and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
  /// Base origin for all requests
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Per-attempt timeout in seconds
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
  /// Delay between retry attempts in milliseconds
  #[serde(default = "default_retry_delay_ms")]
  pub retry_delay_ms: u64,
}

fn default_base_url() -> String {
  DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
  DEFAULT_TIMEOUT_SECS
}

fn default_retry_delay_ms() -> u64 {
  DEFAULT_RETRY_DELAY_MS
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      timeout_secs: default_timeout_secs(),
      retry_delay_ms: default_retry_delay_ms(),
    }
  }
}

impl ClientConfig {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  pub fn retry_delay(&self) -> Duration {
    Duration::from_millis(self.retry_delay_ms)
  }
}

impl Config {
  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./twipsum.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/twipsum/config.yaml
  ///
  /// The feed needs no credentials, so a missing config file is not an
  /// error: the defaults are used instead.
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    match path {
      Some(p) => Self::load_from_path(&p),
      None => Ok(Self::default()),
    }
  }

  fn find_config_file() -> Option<PathBuf> {
    // Check current directory
    let local = PathBuf::from("twipsum.yaml");
    if local.exists() {
      return Some(local);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("twipsum").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    let config: Config = serde_yaml::from_str(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))?;

    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_encode_fixed_behavior() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(3));
    assert_eq!(config.retry_delay(), Duration::from_secs(1));
  }

  #[test]
  fn test_partial_yaml_falls_back_to_defaults() {
    let config: Config = serde_yaml::from_str("client:\n  timeout_secs: 10\n").unwrap();
    assert_eq!(config.client.timeout_secs, 10);
    assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.client.retry_delay_ms, 1000);
  }

  #[test]
  fn test_empty_yaml_is_all_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
  }
}
