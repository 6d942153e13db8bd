use std::fs;
use tempfile::tempdir;
use wfh_kernel::config::{ConfigError, load_config};
use wfh_kernel::domain::config::AppConfig;

#[test]
fn toml_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("wfh.toml");
    fs::write(&path, "[logging]\nlevel = \"debug\"\njson = true\n\n[output]\npretty = true\n")?;

    let cfg: AppConfig = load_config(Some(&path))?;
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert!(cfg.logging.directory.is_none());
    assert!(cfg.output.pretty);
    Ok(())
}

#[test]
fn json_file_is_accepted_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("wfh.json");
    fs::write(&path, r#"{ "output": { "pretty": true } }"#)?;

    let cfg: AppConfig = load_config(Some(&path))?;
    assert!(cfg.output.pretty);
    assert_eq!(cfg.logging.level, "warn");
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<AppConfig>(Some(&path)).expect_err("file is required when given");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn no_file_yields_defaults() {
    let cfg: AppConfig = load_config(None::<&str>).expect("defaults");
    assert!(!cfg.output.pretty);
}
