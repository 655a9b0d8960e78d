use clap::Parser;
use dpi_txn_bridge::config::{load_config_file, load_default_config, merge_config, AppConfig};
use dpi_txn_bridge::driver::run_session;
use dpi_txn_bridge::log::{init_log, set_log};
use dpi_txn_bridge::BridgeError;
use std::path::PathBuf;
use std::process::ExitCode;

/// txn-bridge - replay a scripted read/write session through the transaction adapter
#[derive(Parser, Debug)]
#[command(name = "txn-bridge")]
#[command(version = "0.1.0")]
#[command(about = "Queue transactions for a polling simulation and check they all come back", long_about = None)]
struct Args {
  /// Session config (TOML); the bundled default.toml when omitted
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Quiet mode (suppress per-transaction lines)
  #[arg(short, long)]
  quiet: bool,

  /// Override the expected transaction count handed to the simulation
  #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
  expected: Option<i32>,

  /// Polling order: writes-first, reads-first or interleaved
  #[arg(short, long, value_name = "ORDER")]
  order: Option<String>,

  /// Print the final report as JSON
  #[arg(long)]
  json: bool,
}

fn main() -> ExitCode {
  init_log();
  let args = Args::parse();

  match run(args) {
    Ok(passed) => {
      if passed {
        ExitCode::SUCCESS
      } else {
        ExitCode::FAILURE
      }
    },
    Err(e) => {
      log::error!("{}", e);
      ExitCode::FAILURE
    },
  }
}

fn run(args: Args) -> dpi_txn_bridge::Result<bool> {
  let file_config = match &args.config {
    Some(path) => load_config_file(path)?,
    None => load_default_config()?,
  };

  let mut cli_config = AppConfig::default();
  cli_config.session.expected_txn_count = args.expected;
  cli_config.logging.quiet = args.quiet;

  let mut config = merge_config(file_config, cli_config);
  // an explicit --order wins even when it names the default
  if let Some(order) = args.order {
    config.session.drain_order = order;
  }
  set_log(!config.logging.quiet);

  let outcome = run_session(&config)?;

  if args.json {
    let json = serde_json::to_string_pretty(&outcome.report)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    println!("{}", json);
  } else {
    println!("\n{}", outcome.report);
  }

  match outcome.into_result() {
    Ok(_) => {
      println!("\nTEST PASSED: All transactions retrieved correctly!");
      Ok(true)
    },
    Err(BridgeError::CountMismatch(detail)) => {
      println!("\nTEST FAILED: Transaction count mismatch ({})", detail);
      Ok(false)
    },
    Err(e) => Err(e),
  }
}
