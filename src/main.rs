use anyhow::Context;
use cleaner_robots::adapters::inbound::ConsoleAdapter;
use cleaner_robots::adapters::outbound::init_combined_logger;
use cleaner_robots::application::ExecuteInstructionsService;
use cleaner_robots::config::{Config, DEFAULT_CONFIG_FILE};
use cleaner_robots::domains::logger::FileLogger;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::load_or_default(DEFAULT_CONFIG_FILE)?;

    // Robot reports own stdout, diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("installing tracing subscriber")?;

    let logger =
        init_combined_logger(config.logging.file.as_deref(), config.logging.level_filter());
    let service = Arc::new(ExecuteInstructionsService::new(logger.clone()));
    let adapter =
        ConsoleAdapter::new(service, logger).with_stop_on_error(config.batch.stop_on_error);

    info!("Reading robot commands from stdin");
    let result = adapter.run(io::stdin().lock(), io::stdout().lock());
    FileLogger::flush();

    let summary = result?;
    if summary.is_success() {
        info!("{} robots parked", summary.completed);
        Ok(ExitCode::SUCCESS)
    } else {
        error!(
            "{} robots parked, {} rejected",
            summary.completed,
            summary.failures.len()
        );
        for (index, e) in &summary.failures {
            eprintln!("robot #{}: {}", index + 1, e);
        }
        Ok(ExitCode::FAILURE)
    }
}
