//! Global logging configuration
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static ENABLE_LOG: AtomicBool = AtomicBool::new(true);
static INIT: Once = Once::new();

/// Set per-transaction logging enabled
pub fn set_log(enabled: bool) {
  ENABLE_LOG.store(enabled, Ordering::Relaxed);
}

/// Check if per-transaction logging is enabled, default is true
pub fn is_log_enabled() -> bool {
  ENABLE_LOG.load(Ordering::Relaxed)
}

/// Install env_logger once. `RUST_LOG` wins over the default `info` filter.
pub fn init_log() {
  INIT.call_once(|| {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
      .format_timestamp(None)
      .try_init();
  });
}

/// Log one transaction line, unless quiet mode switched it off
#[macro_export]
macro_rules! log_txn {
  ($($arg:tt)*) => {
    if $crate::utils::log::is_log_enabled() {
      ::log::info!($($arg)*);
    }
  };
}
