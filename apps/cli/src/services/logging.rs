use anyhow::{Context, Result};
use wfh::domain::config::LoggingConfig;
use wfh_logger::{LevelFilter, Logger};

const LOGGER_NAME: &str = "wfh";

/// Installs the global subscriber described by the `logging` config section.
///
/// Console records go to stderr so JSON on stdout stays clean.
///
/// # Errors
/// Returns an error for an unknown level name or when the logger cannot start.
pub fn init(config: &LoggingConfig) -> Result<Logger> {
    let level: LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Unknown log level '{}'", config.level))?;

    let mut builder = Logger::builder().name(LOGGER_NAME).level(level);
    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter.clone());
    }

    let logger = match &config.directory {
        Some(directory) => builder.path(directory).json(config.json).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    Ok(logger)
}
