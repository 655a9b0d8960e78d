pub mod report;
pub mod session;

pub use report::SessionReport;
pub use session::{DriverHandle, HostHandle, Session};
