use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Fans every message out to each attached sink, in attachment order.
#[derive(Default)]
pub struct MultiLogger {
    sinks: Vec<DynLogger>,
}

impl MultiLogger {
    pub fn new(sinks: Vec<DynLogger>) -> Self {
        Self { sinks }
    }

    pub fn attach(&mut self, sink: DynLogger) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.error(msg));
    }
}

/// Console always, plus the file sink when `path` is set and fast_log accepts it.
pub fn init_combined_logger(path: Option<&str>, level: log::LevelFilter) -> DynLogger {
    let console = super::init_console_logger();
    let Some(path) = path else {
        return console;
    };
    match super::init_file_logger(path, level) {
        Ok(file_logger) => Arc::new(MultiLogger::new(vec![console, file_logger])) as DynLogger,
        Err(e) => {
            console.warn(&e);
            console
        }
    }
}
