use super::port_adapter::deliver;
use super::queue::TxnQueue;
use super::txn::{Channel, ChannelStats, Transaction};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

/// Thread-safe adapter for a driver and a simulation running on separate
/// threads. Each channel has its own lock so write traffic never waits on
/// read traffic.
#[derive(Debug, Default)]
pub struct SharedTransactionAdapter {
  reads: Mutex<TxnQueue>,
  writes: Mutex<TxnQueue>,
  expected_txn_count: AtomicI32,
}

impl SharedTransactionAdapter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn enqueue_read(&self, txn: Transaction) {
    log::trace!("enqueue read: {}", txn);
    self.reads.lock().push(txn);
  }

  pub fn enqueue_write(&self, txn: Transaction) {
    log::trace!("enqueue write: {}", txn);
    self.writes.lock().push(txn);
  }

  pub fn poll_read(&self, out: &mut Transaction) -> bool {
    deliver(&mut self.reads.lock(), Channel::Read, out)
  }

  pub fn poll_write(&self, out: &mut Transaction) -> bool {
    deliver(&mut self.writes.lock(), Channel::Write, out)
  }

  /// Counts as a poll: the result becomes the pending read.
  pub fn try_read(&self) -> Option<Transaction> {
    self.reads.lock().pop()
  }

  /// Counts as a poll: the result becomes the pending write.
  pub fn try_write(&self) -> Option<Transaction> {
    self.writes.lock().pop()
  }

  /// Copy of the last delivered read. Returned by value since the lock
  /// cannot outlive this call.
  pub fn get_pending_read(&self) -> Option<Transaction> {
    self.reads.lock().pending().copied()
  }

  pub fn get_pending_write(&self) -> Option<Transaction> {
    self.writes.lock().pending().copied()
  }

  pub fn set_expected_txn_count(&self, count: i32) {
    self.expected_txn_count.store(count, Ordering::Release);
  }

  pub fn get_expected_txn_count(&self) -> i32 {
    self.expected_txn_count.load(Ordering::Acquire)
  }

  pub fn len(&self, channel: Channel) -> usize {
    self.queue(channel).lock().len()
  }

  pub fn is_empty(&self, channel: Channel) -> bool {
    self.queue(channel).lock().is_empty()
  }

  pub fn stats(&self, channel: Channel) -> ChannelStats {
    self.queue(channel).lock().stats()
  }

  fn queue(&self, channel: Channel) -> &Mutex<TxnQueue> {
    match channel {
      Channel::Read => &self.reads,
      Channel::Write => &self.writes,
    }
  }
}
