use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the `wfh` command-line tool.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Log output knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Optional filter directives, e.g. `wfh_schema=debug`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, directory: None, json: false }
    }
}
