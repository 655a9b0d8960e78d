use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest address a producer is expected to target.
/// The adapter does not enforce it; see [`Transaction::address_in_range`].
pub const ADDRESS_MAX: u16 = 0x8000;

/// One read or write directed at the simulated design.
/// Mirrors the `dpi_txn_t` struct on the SystemVerilog side:
/// `bit [15:0] data`, `bit [15:0] address`, `bit portid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
  pub data: u16,
  pub address: u16,
  pub port_id: bool,
}

impl Transaction {
  pub fn new(data: u16, address: u16, port_id: bool) -> Self {
    Self { data, address, port_id }
  }

  pub fn address_in_range(&self) -> bool {
    self.address <= ADDRESS_MAX
  }
}

impl fmt::Display for Transaction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "addr={:#06x}  data={:#06x}  portid={}",
      self.address, self.data, self.port_id as u8
    )
  }
}

/// The two independent transaction streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
  Read,
  Write,
}

impl Channel {
  pub fn as_str(&self) -> &'static str {
    match self {
      Channel::Read => "read",
      Channel::Write => "write",
    }
  }
}

impl fmt::Display for Channel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Per-channel bookkeeping: how many transactions went in, how many came out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStats {
  pub enqueued: u64,
  pub delivered: u64,
}

impl ChannelStats {
  /// Transactions still waiting in the queue.
  pub fn outstanding(&self) -> u64 {
    self.enqueued - self.delivered
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_address_range_boundary() {
    assert!(Transaction::new(0, 0x0000, false).address_in_range());
    assert!(Transaction::new(0, ADDRESS_MAX, false).address_in_range());
    assert!(!Transaction::new(0, ADDRESS_MAX + 1, false).address_in_range());
    assert!(!Transaction::new(0, 0xffff, true).address_in_range());
  }

  #[test]
  fn test_display_matches_harness_format() {
    let txn = Transaction::new(0xbeef, 0x30, true);
    assert_eq!(txn.to_string(), "addr=0x0030  data=0xbeef  portid=1");
  }

  #[test]
  fn test_equality_is_by_value() {
    assert_eq!(Transaction::new(1, 2, false), Transaction::new(1, 2, false));
    assert_ne!(Transaction::new(1, 2, false), Transaction::new(1, 2, true));
  }

  #[test]
  fn test_channel_serde_name() {
    let json = serde_json::to_string(&Channel::Write).unwrap();
    assert_eq!(json, "\"write\"");
  }
}
