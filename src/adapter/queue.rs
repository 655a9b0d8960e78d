use super::txn::{ChannelStats, Transaction};
use std::collections::VecDeque;

/// FIFO for one channel plus the copy of whatever it delivered last.
#[derive(Debug, Clone, Default)]
pub struct TxnQueue {
  queue: VecDeque<Transaction>,
  pending: Option<Transaction>,
  stats: ChannelStats,
}

impl TxnQueue {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append to the tail. Never fails.
  pub fn push(&mut self, txn: Transaction) {
    self.queue.push_back(txn);
    self.stats.enqueued += 1;
  }

  /// Remove the head, remember it as pending and hand it back.
  pub fn pop(&mut self) -> Option<Transaction> {
    let txn = self.queue.pop_front()?;
    self.pending = Some(txn);
    self.stats.delivered += 1;
    Some(txn)
  }

  pub fn pending(&self) -> Option<&Transaction> {
    self.pending.as_ref()
  }

  pub fn stats(&self) -> ChannelStats {
    self.stats
  }

  pub fn len(&self) -> usize {
    self.queue.len()
  }

  pub fn is_empty(&self) -> bool {
    self.queue.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_txn_queue() {
    let mut q = TxnQueue::new();
    assert!(q.is_empty());
    assert!(q.pop().is_none());
    assert!(q.pending().is_none());

    let t1 = Transaction::new(0x1111, 0x10, false);
    let t2 = Transaction::new(0x2222, 0x20, true);
    q.push(t1);
    q.push(t2);
    assert_eq!(q.len(), 2);

    assert_eq!(q.pop(), Some(t1));
    assert_eq!(q.pending(), Some(&t1));
    assert_eq!(q.len(), 1);

    assert_eq!(q.pop(), Some(t2));
    assert_eq!(q.pending(), Some(&t2));

    // an empty pop keeps the last delivery visible
    assert!(q.pop().is_none());
    assert_eq!(q.pending(), Some(&t2));
    assert_eq!(q.stats(), ChannelStats { enqueued: 2, delivered: 2 });
  }
}
