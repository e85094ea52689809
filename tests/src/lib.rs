mod db_test;
pub use db_test::DbTest;

pub mod fixtures;
pub use fixtures::Fixture;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

/// Routes `log` output to the test harness. Set `RUST_LOG=sieve=debug` to
/// see the emitted SQL.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
