pub mod adapter;
pub mod config;
pub mod driver;
pub mod error;
pub mod session;
pub mod utils;

pub use adapter::{Channel, SharedTransactionAdapter, Transaction, TransactionAdapter};
pub use error::{BridgeError, Result};
pub use session::{Session, SessionReport};
pub use utils::log;
