use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target under which store and dispatcher events are emitted, so they can be
/// filtered with `RUST_LOG=inventory=debug`.
const TARGET: &str = "inventory";

/// [`Logger`] port backed by `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
