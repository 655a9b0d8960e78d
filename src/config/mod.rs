pub mod config;

pub use config::{load_config_file, load_default_config, merge_config, parse_config, AppConfig, TxnEntry};
