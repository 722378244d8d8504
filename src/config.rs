use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File the binary looks for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "robots.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Optional log file written through fast_log.
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Abort the whole batch on the first rejected robot.
    pub stop_on_error: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { stop_on_error: true }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Defaults when `path` does not exist; a present but broken file is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
