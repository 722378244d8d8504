use chrono::Utc;
use log::{error as log_error, info as log_info, warn as log_warn};
use std::sync::Arc;

/// Domain-level logging port (Hexagonal port).
/// Keep this API intentionally small and non-fallible from the domain perspective.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// A file-based adapter using `fast_log` for file writing.
pub struct FileLogger;

impl FileLogger {
    /// Initialize the fast_log file logger.
    /// Only the file appender is attached: stdout is reserved for robot reports.
    pub fn init(path: &str, level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
        fast_log::init(fast_log::config::Config::new().file(path).level(level))?;
        Ok(())
    }

    /// Block until queued records reach the file.
    pub fn flush() {
        log::logger().flush();
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        log_info!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn warn(&self, msg: &str) {
        log_warn!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn error(&self, msg: &str) {
        log_error!("{} - {}", Utc::now().to_rfc3339(), msg);
    }
}
