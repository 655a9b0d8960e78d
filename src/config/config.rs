use crate::adapter::{Channel, Transaction};
use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Session section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSection {
  #[serde(default = "default_label")]
  pub label: String,
  /// Oracle value handed to the simulation; `None` means "number of transactions listed"
  #[serde(default)]
  pub expected_txn_count: Option<i32>,
  #[serde(default = "default_drain_order")]
  pub drain_order: String,
  /// Reject addresses above 0x8000 before enqueueing
  #[serde(default = "default_check_address")]
  pub check_address: bool,
}

fn default_label() -> String {
  "default".to_string()
}

fn default_drain_order() -> String {
  "writes-first".to_string()
}

fn default_check_address() -> bool {
  true
}

impl Default for SessionSection {
  fn default() -> Self {
    Self {
      label: default_label(),
      expected_txn_count: None,
      drain_order: default_drain_order(),
      check_address: default_check_address(),
    }
  }
}

/// Logging section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingSection {
  #[serde(default)]
  pub quiet: bool,
}

/// One scripted transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TxnEntry {
  pub kind: Channel,
  pub address: u16,
  #[serde(default)]
  pub data: u16,
  #[serde(default)]
  pub port_id: bool,
}

impl TxnEntry {
  pub fn transaction(&self) -> Transaction {
    Transaction::new(self.data, self.address, self.port_id)
  }
}

/// Top-level config
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
  #[serde(default)]
  pub session: SessionSection,
  #[serde(default)]
  pub logging: LoggingSection,
  #[serde(default)]
  pub transactions: Vec<TxnEntry>,
}

impl AppConfig {
  /// Expected count as configured, or the scripted total when unset.
  pub fn expected_txn_count(&self) -> i32 {
    self
      .session
      .expected_txn_count
      .unwrap_or_else(|| i32::try_from(self.transactions.len()).unwrap_or(i32::MAX))
  }
}

/// Load default.toml shipped next to this module
pub fn load_default_config() -> Result<AppConfig> {
  let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  let config_path = manifest_dir.join("src").join("config").join("default.toml");

  load_config_file(&config_path)
}

/// Load config from a file
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
  let content = fs::read_to_string(path)?;
  parse_config(&content, &path.display().to_string())
}

pub fn parse_config(content: &str, origin: &str) -> Result<AppConfig> {
  toml::from_str::<AppConfig>(content).map_err(|source| BridgeError::ConfigParse {
    path: origin.to_string(),
    source,
  })
}

/// Merge two configs, the override wins where it carries a value
pub fn merge_config(mut base: AppConfig, override_config: AppConfig) -> AppConfig {
  if override_config.session.label != default_label() {
    base.session.label = override_config.session.label;
  }
  if override_config.session.expected_txn_count.is_some() {
    base.session.expected_txn_count = override_config.session.expected_txn_count;
  }
  if override_config.session.drain_order != default_drain_order() {
    base.session.drain_order = override_config.session.drain_order;
  }
  if !override_config.session.check_address {
    base.session.check_address = false;
  }

  if override_config.logging.quiet {
    base.logging.quiet = true;
  }

  if !override_config.transactions.is_empty() {
    base.transactions = override_config.transactions;
  }

  base
}
