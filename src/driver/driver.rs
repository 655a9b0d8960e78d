use super::drain::{drain, DrainOrder, Drained};
use crate::adapter::{Channel, DriverPort, ADDRESS_MAX};
use crate::config::{AppConfig, TxnEntry};
use crate::error::{BridgeError, Result};
use crate::log_txn;
use crate::session::{Session, SessionReport};

/// Check every scripted transaction against the driver-side address limit.
/// Nothing is enqueued when one of them is out of range.
pub fn validate(entries: &[TxnEntry]) -> Result<()> {
  for (index, entry) in entries.iter().enumerate() {
    if !entry.transaction().address_in_range() {
      return Err(BridgeError::AddressOutOfRange {
        channel: entry.kind,
        index,
        address: entry.address,
        limit: ADDRESS_MAX,
      });
    }
  }
  Ok(())
}

/// Push the script into the adapter in listed order and set the oracle.
pub fn load<D: DriverPort>(port: &mut D, entries: &[TxnEntry], expected: i32) {
  port.set_expected_txn_count(expected);
  for (i, entry) in entries.iter().enumerate() {
    let txn = entry.transaction();
    match entry.kind {
      Channel::Read => {
        port.enqueue_read(txn);
        log_txn!("[{}] QUEUED READ:  {}", i + 1, txn);
      },
      Channel::Write => {
        port.enqueue_write(txn);
        log_txn!("[{}] QUEUED WRITE: {}", i + 1, txn);
      },
    }
  }
}

/// Result of one scripted session.
#[derive(Debug, Clone)]
pub struct DriveOutcome {
  pub report: SessionReport,
  pub drained: Drained,
}

impl DriveOutcome {
  /// Fail when a channel returned a different number than it was given,
  /// or when the polling side saw a total other than the expected count.
  pub fn into_result(self) -> Result<SessionReport> {
    if !self.report.is_consistent() {
      return Err(BridgeError::CountMismatch(format!(
        "reads {}/{} writes {}/{}",
        self.report.reads_retrieved,
        self.report.reads_queued,
        self.report.writes_retrieved,
        self.report.writes_queued
      )));
    }
    if !self.drained.matches_oracle() || !self.report.matches_expected() {
      return Err(BridgeError::CountMismatch(format!(
        "observed {} transactions, expected {}",
        self.drained.deliveries.len(),
        self.drained.expected
      )));
    }
    Ok(self.report)
  }
}

/// Run one session end to end: validate, enqueue, drain, tally.
pub fn run_session(config: &AppConfig) -> Result<DriveOutcome> {
  let order: DrainOrder = config.session.drain_order.parse()?;
  if config.session.check_address {
    validate(&config.transactions)?;
  }

  let session = Session::new(config.session.label.clone());
  let expected = config.expected_txn_count();
  log::info!(
    "session {} ({}): {} transactions, expected {}",
    session.id(),
    session.label(),
    config.transactions.len(),
    expected
  );

  load(&mut session.driver(), &config.transactions, expected);

  log::info!("draining ({:?})", order);
  let drained = drain(&mut session.host(), order);

  let report = session.report();
  if !drained.matches_oracle() {
    log::warn!(
      "observed {} transactions, expected {}",
      drained.deliveries.len(),
      drained.expected
    );
  }

  Ok(DriveOutcome { report, drained })
}
