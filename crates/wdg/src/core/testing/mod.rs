/// Harness for driving a toolkit instance in tests.
pub mod harness;
/// Recording widget.
pub mod probe;

pub use harness::Harness;
pub use probe::{Call, Journal, PROBE_HANDLES, Probe};
