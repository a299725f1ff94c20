//! Runtime server configuration.
//!
//! Every key has a default so the server starts with no config file present;
//! a TOML file and `KPA_`-prefixed environment variables override them.

use std::path::PathBuf;

use kpa_api::AuthConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Demo credential pair and the token issued for it.
  pub auth:       AuthConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig {
      host:       "127.0.0.1".to_owned(),
      port:       8000,
      store_path: PathBuf::from("kpa-forms.db"),
      auth:       AuthConfig::demo(),
    }
  }
}
