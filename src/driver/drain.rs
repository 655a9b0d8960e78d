use crate::adapter::{Channel, HostPort, Transaction};
use crate::error::BridgeError;
use crate::log_txn;
use std::str::FromStr;

/// How the polling side visits the two channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOrder {
  /// All writes, then all reads.
  WritesFirst,
  ReadsFirst,
  /// One read poll and one write poll per simulated cycle.
  Interleaved,
}

impl FromStr for DrainOrder {
  type Err = BridgeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "writes-first" => Ok(DrainOrder::WritesFirst),
      "reads-first" => Ok(DrainOrder::ReadsFirst),
      "interleaved" => Ok(DrainOrder::Interleaved),
      _ => Err(BridgeError::UnknownDrainOrder(s.to_string())),
    }
  }
}

/// Everything the polling side received, in delivery order, plus the
/// expected count it read back once the channels ran dry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drained {
  pub deliveries: Vec<(Channel, Transaction)>,
  pub cycles: u64,
  pub expected: i32,
}

impl Drained {
  pub fn on(&self, channel: Channel) -> impl Iterator<Item = &Transaction> + '_ {
    self
      .deliveries
      .iter()
      .filter(move |(c, _)| *c == channel)
      .map(|(_, txn)| txn)
  }

  pub fn count(&self, channel: Channel) -> u64 {
    self.on(channel).count() as u64
  }

  /// The polling side's own tally agrees with the oracle it read.
  pub fn matches_oracle(&self) -> bool {
    usize::try_from(self.expected).map_or(false, |expected| expected == self.deliveries.len())
  }

  fn record(&mut self, channel: Channel, txn: Transaction) {
    match channel {
      Channel::Read => log_txn!("[READ]  Retrieved: {}", txn),
      Channel::Write => log_txn!("[WRITE] Retrieved: {}", txn),
    }
    self.deliveries.push((channel, txn));
  }
}

/// Poll until both channels report empty.
pub fn drain<H: HostPort>(host: &mut H, order: DrainOrder) -> Drained {
  let mut drained = Drained::default();
  let mut slot = Transaction::default();

  match order {
    DrainOrder::WritesFirst => {
      drain_channel(host, Channel::Write, &mut slot, &mut drained);
      drain_channel(host, Channel::Read, &mut slot, &mut drained);
    },
    DrainOrder::ReadsFirst => {
      drain_channel(host, Channel::Read, &mut slot, &mut drained);
      drain_channel(host, Channel::Write, &mut slot, &mut drained);
    },
    DrainOrder::Interleaved => loop {
      drained.cycles += 1;
      let got_read = host.poll_read(&mut slot);
      if got_read {
        drained.record(Channel::Read, slot);
      }
      let got_write = host.poll_write(&mut slot);
      if got_write {
        drained.record(Channel::Write, slot);
      }
      if !got_read && !got_write {
        break;
      }
    },
  }

  drained.expected = host.get_expected_txn_count();
  drained
}

fn drain_channel<H: HostPort>(host: &mut H, channel: Channel, slot: &mut Transaction, drained: &mut Drained) {
  loop {
    drained.cycles += 1;
    let delivered = match channel {
      Channel::Read => host.poll_read(slot),
      Channel::Write => host.poll_write(slot),
    };
    if !delivered {
      break;
    }
    drained.record(channel, *slot);
  }
}
