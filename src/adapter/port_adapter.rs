use super::queue::TxnQueue;
use super::txn::{Channel, ChannelStats, Transaction};

/// Two independent FIFO channels between a driver that enqueues ahead of
/// time and a simulation that polls once per cycle.
///
/// Single-threaded: producer and consumer are expected to take turns on
/// the same thread. For separate threads use
/// [`SharedTransactionAdapter`](super::SharedTransactionAdapter).
#[derive(Debug, Clone, Default)]
pub struct TransactionAdapter {
  reads: TxnQueue,
  writes: TxnQueue,
  expected_txn_count: i32,
}

impl TransactionAdapter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn enqueue_read(&mut self, txn: Transaction) {
    log::trace!("enqueue read: {}", txn);
    self.reads.push(txn);
  }

  pub fn enqueue_write(&mut self, txn: Transaction) {
    log::trace!("enqueue write: {}", txn);
    self.writes.push(txn);
  }

  /// Deliver the oldest pending read into `out`.
  /// Returns false and leaves `out` untouched when nothing is queued.
  pub fn poll_read(&mut self, out: &mut Transaction) -> bool {
    deliver(&mut self.reads, Channel::Read, out)
  }

  /// Deliver the oldest pending write into `out`.
  /// Returns false and leaves `out` untouched when nothing is queued.
  pub fn poll_write(&mut self, out: &mut Transaction) -> bool {
    deliver(&mut self.writes, Channel::Write, out)
  }

  /// Counts as a poll: the result becomes the pending read.
  pub fn try_read(&mut self) -> Option<Transaction> {
    self.reads.pop()
  }

  /// Counts as a poll: the result becomes the pending write.
  pub fn try_write(&mut self) -> Option<Transaction> {
    self.writes.pop()
  }

  /// Last read handed out by a successful poll, if any.
  pub fn get_pending_read(&self) -> Option<&Transaction> {
    self.reads.pending()
  }

  /// Last write handed out by a successful poll, if any.
  pub fn get_pending_write(&self) -> Option<&Transaction> {
    self.writes.pending()
  }

  pub fn set_expected_txn_count(&mut self, count: i32) {
    self.expected_txn_count = count;
  }

  pub fn get_expected_txn_count(&self) -> i32 {
    self.expected_txn_count
  }

  pub fn len(&self, channel: Channel) -> usize {
    self.queue(channel).len()
  }

  pub fn is_empty(&self, channel: Channel) -> bool {
    self.queue(channel).is_empty()
  }

  pub fn stats(&self, channel: Channel) -> ChannelStats {
    self.queue(channel).stats()
  }

  fn queue(&self, channel: Channel) -> &TxnQueue {
    match channel {
      Channel::Read => &self.reads,
      Channel::Write => &self.writes,
    }
  }
}

pub(crate) fn deliver(queue: &mut TxnQueue, channel: Channel, out: &mut Transaction) -> bool {
  match queue.pop() {
    Some(txn) => {
      log::trace!("poll {}: {}", channel, txn);
      *out = txn;
      true
    },
    None => false,
  }
}
