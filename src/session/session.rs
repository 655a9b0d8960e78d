use super::report::SessionReport;
use crate::adapter::{Channel, DriverPort, HostPort, SharedTransactionAdapter, Transaction};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// One test session: owns the adapter that both the driver and the
/// simulation side talk to. Sessions are independent, so several can live
/// in the same process.
#[derive(Debug)]
pub struct Session {
  id: u64,
  label: String,
  adapter: Arc<SharedTransactionAdapter>,
}

impl Session {
  pub fn new(label: impl Into<String>) -> Self {
    let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
    let label = label.into();
    log::debug!("session {} ({}) opened", id, label);
    Self {
      id,
      label,
      adapter: Arc::new(SharedTransactionAdapter::new()),
    }
  }

  pub fn id(&self) -> u64 {
    self.id
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  /// Handle for the polling side.
  pub fn host(&self) -> HostHandle {
    HostHandle {
      adapter: Arc::clone(&self.adapter),
    }
  }

  /// Handle for the producing side.
  pub fn driver(&self) -> DriverHandle {
    DriverHandle {
      adapter: Arc::clone(&self.adapter),
    }
  }

  pub fn report(&self) -> SessionReport {
    let reads = self.adapter.stats(Channel::Read);
    let writes = self.adapter.stats(Channel::Write);
    SessionReport {
      session_id: self.id,
      expected: self.adapter.get_expected_txn_count(),
      reads_queued: reads.enqueued,
      writes_queued: writes.enqueued,
      reads_retrieved: reads.delivered,
      writes_retrieved: writes.delivered,
    }
  }
}

impl Drop for Session {
  fn drop(&mut self) {
    log::debug!("session {} ({}) closed", self.id, self.label);
  }
}

/// What the simulation may call: poll and read the oracle value.
#[derive(Debug, Clone)]
pub struct HostHandle {
  adapter: Arc<SharedTransactionAdapter>,
}

impl HostHandle {
  pub fn poll_read(&self, out: &mut Transaction) -> bool {
    self.adapter.poll_read(out)
  }

  pub fn poll_write(&self, out: &mut Transaction) -> bool {
    self.adapter.poll_write(out)
  }

  pub fn get_pending_read(&self) -> Option<Transaction> {
    self.adapter.get_pending_read()
  }

  pub fn get_pending_write(&self) -> Option<Transaction> {
    self.adapter.get_pending_write()
  }

  pub fn get_expected_txn_count(&self) -> i32 {
    self.adapter.get_expected_txn_count()
  }
}

/// What the test driver may call: enqueue and configure.
#[derive(Debug, Clone)]
pub struct DriverHandle {
  adapter: Arc<SharedTransactionAdapter>,
}

impl DriverHandle {
  pub fn enqueue_read(&self, txn: Transaction) {
    self.adapter.enqueue_read(txn)
  }

  pub fn enqueue_write(&self, txn: Transaction) {
    self.adapter.enqueue_write(txn)
  }

  pub fn enqueue(&self, channel: Channel, txn: Transaction) {
    match channel {
      Channel::Read => self.enqueue_read(txn),
      Channel::Write => self.enqueue_write(txn),
    }
  }

  pub fn set_expected_txn_count(&self, count: i32) {
    self.adapter.set_expected_txn_count(count)
  }
}

impl HostPort for HostHandle {
  fn poll_read(&mut self, out: &mut Transaction) -> bool {
    HostHandle::poll_read(self, out)
  }

  fn poll_write(&mut self, out: &mut Transaction) -> bool {
    HostHandle::poll_write(self, out)
  }

  fn get_expected_txn_count(&self) -> i32 {
    HostHandle::get_expected_txn_count(self)
  }
}

impl DriverPort for DriverHandle {
  fn enqueue_read(&mut self, txn: Transaction) {
    DriverHandle::enqueue_read(self, txn)
  }

  fn enqueue_write(&mut self, txn: Transaction) {
    DriverHandle::enqueue_write(self, txn)
  }

  fn set_expected_txn_count(&mut self, count: i32) {
    DriverHandle::set_expected_txn_count(self, count)
  }
}
