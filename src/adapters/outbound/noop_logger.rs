use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Discards everything.
struct Silent;

impl DomainLogger for Silent {
    fn info(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

/// Default logger for unit tests and library callers that do not care about diagnostics.
pub fn init_noop_logger() -> DynLogger {
    Arc::new(Silent)
}
