use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards to `tracing`; the binary points the subscriber at stderr.
struct TracingBridge;

impl DomainLogger for TracingBridge {
    fn info(&self, msg: &str) { tracing::info!("{}", msg); }
    fn warn(&self, msg: &str) { tracing::warn!("{}", msg); }
    fn error(&self, msg: &str) { tracing::error!("{}", msg); }
}

/// Initialize a console-backed DomainLogger (useful as a fallback)
pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(TracingBridge {})
}
