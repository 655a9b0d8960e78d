use dpi_txn_bridge::config::{load_config_file, AppConfig, TxnEntry};
use dpi_txn_bridge::driver::{run_session, DrainOrder};
use dpi_txn_bridge::{BridgeError, Channel, Session, Transaction};
use std::path::PathBuf;
use std::thread;

fn temp_config(name: &str, body: &str) -> PathBuf {
  let path = std::env::temp_dir().join(format!("txn_bridge_{}_{}.toml", name, std::process::id()));
  std::fs::write(&path, body).unwrap();
  path
}

#[test]
fn host_and_driver_on_separate_threads() {
  let session = Session::new("threads");
  let driver = session.driver();
  let host = session.host();

  driver.set_expected_txn_count(64);
  let producer = thread::spawn(move || {
    for i in 0..32u16 {
      driver.enqueue_read(Transaction::new(i, i * 2, false));
      driver.enqueue_write(Transaction::new(i, i * 2 + 1, true));
    }
  });

  let expected = host.get_expected_txn_count();
  let mut observed = 0;
  let mut out = Transaction::default();
  let mut last_read: Option<u16> = None;
  let mut last_write: Option<u16> = None;
  while observed < expected {
    if host.poll_read(&mut out) {
      assert!(last_read.map_or(true, |prev| out.address > prev));
      last_read = Some(out.address);
      observed += 1;
    }
    if host.poll_write(&mut out) {
      assert!(last_write.map_or(true, |prev| out.address > prev));
      last_write = Some(out.address);
      observed += 1;
    }
  }
  producer.join().unwrap();

  let report = session.report();
  assert!(report.is_consistent());
  assert!(report.matches_expected());
  assert_eq!(host.get_pending_read().map(|t| t.address), Some(62));
  assert_eq!(host.get_pending_write().map(|t| t.address), Some(63));
}

#[test]
fn many_sessions_in_one_process() {
  let sessions: Vec<_> = (0..4).map(|i| Session::new(format!("s{}", i))).collect();
  for (i, session) in sessions.iter().enumerate() {
    session.driver().set_expected_txn_count(i as i32);
    for n in 0..i {
      session.driver().enqueue(Channel::Write, Transaction::new(n as u16, 0, false));
    }
  }

  for (i, session) in sessions.iter().enumerate() {
    let host = session.host();
    let mut out = Transaction::default();
    let mut count = 0;
    while host.poll_write(&mut out) {
      count += 1;
    }
    assert_eq!(count, i);
    assert!(session.report().matches_expected());
  }
}

#[test]
fn empty_session_reports_zero() {
  let session = Session::new("empty");
  session.driver().set_expected_txn_count(0);

  let host = session.host();
  let mut out = Transaction::new(9, 9, true);
  assert!(!host.poll_read(&mut out));
  assert!(!host.poll_write(&mut out));
  assert_eq!(out, Transaction::new(9, 9, true));
  assert_eq!(host.get_expected_txn_count(), 0);
  assert!(session.report().matches_expected());
}

#[test]
fn scripted_session_from_file() {
  let path = temp_config(
    "scripted",
    r#"
[session]
label = "file"
drain_order = "interleaved"

[logging]
quiet = true

[[transactions]]
kind = "write"
address = 0x0100
data = 0xaaaa

[[transactions]]
kind = "read"
address = 0x0200

[[transactions]]
kind = "write"
address = 0x8000
"#,
  );

  let config = load_config_file(&path).unwrap();
  std::fs::remove_file(&path).ok();
  assert_eq!(config.session.drain_order.parse::<DrainOrder>().unwrap(), DrainOrder::Interleaved);

  let outcome = run_session(&config).unwrap();
  let writes: Vec<_> = outcome.drained.on(Channel::Write).map(|t| t.address).collect();
  assert_eq!(writes, vec![0x0100, 0x8000]);

  let report = outcome.into_result().unwrap();
  assert_eq!(report.expected, 3);
  assert_eq!(report.total_retrieved(), 3);
}

#[test]
fn unknown_drain_order_is_an_error() {
  let mut config = AppConfig::default();
  config.session.drain_order = "sideways".to_string();
  config.transactions.push(TxnEntry {
    kind: Channel::Read,
    address: 1,
    data: 0,
    port_id: false,
  });
  assert!(matches!(run_session(&config), Err(BridgeError::UnknownDrainOrder(_))));
}

#[test]
fn missing_config_file_is_io_error() {
  let path = std::env::temp_dir().join("txn_bridge_does_not_exist.toml");
  assert!(matches!(load_config_file(&path), Err(BridgeError::Io(_))));
}

#[test]
fn oracle_disagreeing_with_traffic_fails_the_run() {
  let mut config = AppConfig::default();
  config.session.expected_txn_count = Some(99);
  config.transactions.push(TxnEntry {
    kind: Channel::Read,
    address: 0x10,
    data: 0,
    port_id: false,
  });

  let outcome = run_session(&config).unwrap();
  assert!(!outcome.report.matches_expected());
  assert!(matches!(outcome.into_result(), Err(BridgeError::CountMismatch(_))));
}
