use crate::adapter::Channel;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

/// Failures of the surrounding harness. Polling an empty channel is not one
/// of them.
#[derive(Debug, Error)]
pub enum BridgeError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("failed to parse config {path}: {source}")]
  ConfigParse {
    path: String,
    #[source]
    source: toml::de::Error,
  },

  #[error("{channel} transaction #{index} targets address {address:#06x}, above limit {limit:#06x}")]
  AddressOutOfRange {
    channel: Channel,
    index: usize,
    address: u16,
    limit: u16,
  },

  #[error("transaction count mismatch: {0}")]
  CountMismatch(String),

  #[error("unknown drain order: {0}")]
  UnknownDrainOrder(String),
}
