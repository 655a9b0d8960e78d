pub mod port;
pub mod port_adapter;
pub mod queue;
pub mod shared;
pub mod txn;

pub use port::{DriverPort, HostPort};
pub use port_adapter::TransactionAdapter;
pub use shared::SharedTransactionAdapter;
pub use txn::{Channel, ChannelStats, Transaction, ADDRESS_MAX};
