use cleaner_robots::adapters::outbound::init_combined_logger;
use cleaner_robots::domains::logger::FileLogger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

// fast_log installs a process-wide logger, so this binary initializes it exactly once.
#[test]
fn test_combined_logger_writes_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("robots.log");
    let logger = init_combined_logger(path.to_str(), log::LevelFilter::Info);

    logger.info("robot parked at (0, 1)");
    logger.warn("robot rejected");
    FileLogger::flush();

    let mut content = String::new();
    for _ in 0..50 {
        content = fs::read_to_string(&path).unwrap_or_default();
        if content.contains("robot rejected") {
            break;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    assert!(content.contains("robot parked at (0, 1)"), "log file: {:?}", content);
    assert!(content.contains("robot rejected"), "log file: {:?}", content);
}
