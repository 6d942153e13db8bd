use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `WFH__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "WFH";
/// Separator between prefix and nested keys.
pub const ENV_SEPARATOR: &str = "__";

/// Errors raised while assembling configuration sources.
#[wfh_derive::wfh_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file overlaid with environment variables.
///
/// Layers, lowest precedence first:
/// 1. **File**: when `path` is given, the file is required and its format follows the
///    extension (`.toml`, `.json`, `.yaml`, ...).
/// 2. **Environment**: variables prefixed with `WFH__`; nested keys are joined by double
///    underscores (`WFH__OUTPUT__PRETTY=true` maps to `output.pretty`).
///
/// Missing sections fall back to the target's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use wfh_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct CliConfig {
///     pretty: bool,
/// }
///
/// let cfg: CliConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layers(path.as_ref().map(AsRef::as_ref), environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn load_layers<T>(path: Option<&Path>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    match path {
        Some(file) => {
            info!("Loading config from {}", file.display());
            builder = builder.add_source(File::from(file).required(true));
        },
        None => debug!("No config file given, using defaults and environment"),
    }

    let config = builder
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;
    use std::fs;
    use tempfile::tempdir;
    use wfh_domain::config::AppConfig;

    fn vars(pairs: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> =
            pairs.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect();
        environment().source(Some(source))
    }

    #[test]
    fn prefixed_variables_map_to_nested_keys() {
        let cfg: AppConfig = load_layers(
            None,
            vars(&[("WFH__LOGGING__LEVEL", "debug"), ("WFH__OUTPUT__PRETTY", "true")]),
        )
        .unwrap();

        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.output.pretty);
    }

    #[test]
    fn environment_overrides_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wfh.toml");
        fs::write(&path, "[logging]\nlevel = \"info\"\njson = true\n\n[output]\npretty = false\n")
            .unwrap();

        let cfg: AppConfig = load_layers(
            Some(&path),
            vars(&[("WFH__LOGGING__LEVEL", "trace"), ("WFH__OUTPUT__PRETTY", "true")]),
        )
        .unwrap();

        assert_eq!(cfg.logging.level, "trace");
        assert!(cfg.output.pretty);
        assert!(cfg.logging.json);
    }

    #[test]
    fn unprefixed_variables_are_ignored() {
        let cfg: AppConfig =
            load_layers(None, vars(&[("LOGGING__LEVEL", "error"), ("WFH_OUTPUT_PRETTY", "true")]))
                .unwrap();

        assert_eq!(cfg.logging.level, "warn");
        assert!(!cfg.output.pretty);
    }

    #[test]
    fn unparsable_override_is_reported() {
        let err = load_layers::<AppConfig>(None, vars(&[("WFH__OUTPUT__PRETTY", "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    }
}
