use serde::{Deserialize, Serialize};
use std::fmt;

/// End-of-test tally, compared against the expected count the driver set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
  pub session_id: u64,
  pub expected: i32,
  pub reads_queued: u64,
  pub writes_queued: u64,
  pub reads_retrieved: u64,
  pub writes_retrieved: u64,
}

impl SessionReport {
  pub fn total_queued(&self) -> u64 {
    self.reads_queued + self.writes_queued
  }

  pub fn total_retrieved(&self) -> u64 {
    self.reads_retrieved + self.writes_retrieved
  }

  /// Every queued transaction came back out, per channel.
  pub fn is_consistent(&self) -> bool {
    self.reads_queued == self.reads_retrieved && self.writes_queued == self.writes_retrieved
  }

  /// The retrieved total equals the oracle value. A negative oracle never matches.
  pub fn matches_expected(&self) -> bool {
    u64::try_from(self.expected).map_or(false, |expected| expected == self.total_retrieved())
  }
}

impl fmt::Display for SessionReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "=== Session {} Summary ===", self.session_id)?;
    writeln!(f, "Expected transactions: {}", self.expected)?;
    writeln!(f, "Total  queued: {}", self.total_queued())?;
    writeln!(f, "Reads  queued: {}", self.reads_queued)?;
    writeln!(f, "Writes queued: {}", self.writes_queued)?;
    writeln!(f, "Reads  retrieved: {}", self.reads_retrieved)?;
    write!(f, "Writes retrieved: {}", self.writes_retrieved)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_report_checks() {
    let report = SessionReport {
      session_id: 1,
      expected: 3,
      reads_queued: 2,
      writes_queued: 1,
      reads_retrieved: 2,
      writes_retrieved: 1,
    };
    assert!(report.is_consistent());
    assert!(report.matches_expected());

    let short = SessionReport { writes_retrieved: 0, ..report };
    assert!(!short.is_consistent());
    assert!(!short.matches_expected());

    let negative = SessionReport { expected: -3, ..report };
    assert!(negative.is_consistent());
    assert!(!negative.matches_expected());
  }

  #[test]
  fn test_summary_lists_totals() {
    let report = SessionReport {
      session_id: 4,
      expected: 3,
      reads_queued: 2,
      writes_queued: 1,
      reads_retrieved: 2,
      writes_retrieved: 1,
    };
    assert_eq!(report.total_queued(), 3);
    let text = report.to_string();
    assert!(text.starts_with("=== Session 4 Summary ==="));
    assert!(text.contains("Total  queued: 3"));
    assert!(text.contains("Writes retrieved: 1"));
  }

  #[test]
  fn test_empty_report_matches_zero() {
    let report = SessionReport::default();
    assert!(report.is_consistent());
    assert!(report.matches_expected());
  }
}
