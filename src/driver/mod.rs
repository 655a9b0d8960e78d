pub mod drain;
pub mod driver;

pub use drain::{drain, DrainOrder, Drained};
pub use driver::{load, run_session, validate, DriveOutcome};
