//! # Logger
//!
//! One place to install the global `tracing` subscriber for the watchface tooling.
//! Console output is on by default; a rolling, non-blocking file sink can be added with
//! [`LoggerBuilder::path`]. Filter directives come from [`LoggerBuilder::env_filter`];
//! a non-blank `RUST_LOG` overrides them.
//!
//! ## Example
//!
//! ```rust
//! # use wfh_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("wfh")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Builder for the global tracing subscriber.
///
/// A name is mandatory before [`LoggerBuilder::init`] becomes available; file-only knobs
/// unlock after [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { config: self.config, name: WithName(name.into()), file: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Maximum number of rotated files kept on disk.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes file records as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Default level when no filter directive matches.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Explicit filter directives, e.g. `wfh_schema=debug,wfh_settings=info`.
    ///
    /// A non-blank `RUST_LOG` overrides these at [`LoggerBuilder::init`]. Otherwise an
    /// unparsable directive makes [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Directory for rolling log files. Created on [`LoggerBuilder::init`].
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for as long as records should reach the file
    /// sink; dropping it flushes and stops the background writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`, a bad
    ///   filter directive, or when neither console nor file output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory or file
    ///   cannot be created.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let LoggerBuilder { config, name: WithName(name), .. } = self;
        validate_config(&config, &name)?;

        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_env_filter(&config, rust_log.as_deref())?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if config.console {
            layers.push(layer().compact().with_ansi(true).with_writer(std::io::stderr).boxed());
        }

        let guard = match &config.path {
            Some(path) => {
                fs::create_dir_all(path)
                    .context(format!("Failed to create log directory: {}", path.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(config.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(config.max_files)
                    .build(path)
                    .context(format!("Failed to open log files in {}", path.display()))?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if config.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %name, "Logging initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Holds the background writer guard when a file sink is configured.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    ///
    /// ```rust
    /// use wfh_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("wfh-validate")
    ///     .level(LevelFilter::WARN)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file: PhantomData }
    }

    /// Whether a file sink (and therefore a background writer) is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.path.is_some() && config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

/// `RUST_LOG`, when set and non-blank, wins over the configured directives.
fn build_env_filter(
    config: &LoggerConfig,
    from_env: Option<&str>,
) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    if let Some(directives) = from_env.filter(|directives| !directives.trim().is_empty()) {
        return Ok(builder.parse_lossy(directives));
    }
    match &config.env_filter {
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            }
        }),
        None => Ok(builder.parse_lossy("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_with_console_at_info() {
        let builder = Logger::builder().name("wfh-test").env_filter("wfh_schema=debug");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("wfh_schema=debug"));
        assert!(builder.config.path.is_none());
    }

    #[test]
    fn file_options_are_recorded() {
        let builder = Logger::builder()
            .name("wfh-test")
            .console(false)
            .path("logs")
            .max_files(3)
            .json(true)
            .rotation(Rotation::HOURLY);

        assert!(!builder.config.console);
        assert_eq!(builder.config.max_files, 3);
        assert!(builder.config.json);
        assert_eq!(builder.config.path.as_deref(), Some(std::path::Path::new("logs")));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_config(&LoggerConfig::default(), "   ").expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn zero_max_files_is_rejected_only_with_a_file_sink() {
        let mut config = LoggerConfig { max_files: 0, ..LoggerConfig::default() };
        assert!(validate_config(&config, "wfh").is_ok());

        config.path = Some(PathBuf::from("logs"));
        assert!(validate_config(&config, "wfh").is_err());
    }

    #[test]
    fn rust_log_overrides_configured_directives() {
        let config = LoggerConfig {
            env_filter: Some("wfh_schema=debug".to_owned()),
            ..LoggerConfig::default()
        };

        let filter = build_env_filter(&config, Some("wfh_settings=trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
        assert!(filter.to_string().contains("wfh_settings"));
        assert!(!filter.to_string().contains("wfh_schema"));
    }

    #[test]
    fn configured_directives_apply_without_rust_log() {
        let config = LoggerConfig {
            env_filter: Some("wfh_schema=debug".to_owned()),
            ..LoggerConfig::default()
        };

        for from_env in [None, Some(""), Some("  ")] {
            let filter = build_env_filter(&config, from_env).unwrap();
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
            assert!(filter.to_string().contains("wfh_schema"));
        }
    }

    #[test]
    fn default_level_applies_when_nothing_is_set() {
        let config = LoggerConfig { level: LevelFilter::WARN, ..LoggerConfig::default() };
        let filter = build_env_filter(&config, None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn broken_rust_log_does_not_fail_init() {
        let config = LoggerConfig {
            env_filter: Some("wfh=[".to_owned()),
            ..LoggerConfig::default()
        };
        assert!(build_env_filter(&config, Some("wfh_settings=trace")).is_ok());
        assert!(build_env_filter(&LoggerConfig::default(), Some("wfh=[")).is_ok());
    }

    #[test]
    fn bad_filter_directive_is_reported() {
        let config =
            LoggerConfig { env_filter: Some("wfh=[".to_owned()), ..LoggerConfig::default() };
        let err = build_env_filter(&config, None).expect_err("invalid directive");
        assert!(err.to_string().contains("Invalid env filter"));
    }
}
