use super::port_adapter::TransactionAdapter;
use super::txn::Transaction;

/// Calls made by the simulation side, once per polling opportunity.
pub trait HostPort {
  fn poll_read(&mut self, out: &mut Transaction) -> bool;
  fn poll_write(&mut self, out: &mut Transaction) -> bool;
  fn get_expected_txn_count(&self) -> i32;
}

/// Calls made by the test driver, usually before polling starts.
pub trait DriverPort {
  fn enqueue_read(&mut self, txn: Transaction);
  fn enqueue_write(&mut self, txn: Transaction);
  fn set_expected_txn_count(&mut self, count: i32);
}

impl HostPort for TransactionAdapter {
  fn poll_read(&mut self, out: &mut Transaction) -> bool {
    TransactionAdapter::poll_read(self, out)
  }

  fn poll_write(&mut self, out: &mut Transaction) -> bool {
    TransactionAdapter::poll_write(self, out)
  }

  fn get_expected_txn_count(&self) -> i32 {
    TransactionAdapter::get_expected_txn_count(self)
  }
}

impl DriverPort for TransactionAdapter {
  fn enqueue_read(&mut self, txn: Transaction) {
    TransactionAdapter::enqueue_read(self, txn)
  }

  fn enqueue_write(&mut self, txn: Transaction) {
    TransactionAdapter::enqueue_write(self, txn)
  }

  fn set_expected_txn_count(&mut self, count: i32) {
    TransactionAdapter::set_expected_txn_count(self, count)
  }
}
