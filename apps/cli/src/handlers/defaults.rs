use crate::services::io::{print_json, read_schema};
use anyhow::Result;
use std::path::Path;
use wfh::{WatchSettings, hellboy_document};

/// Initial settings for `schema`, or for the built-in page when `None`.
///
/// # Errors
/// Returns an error if the schema file cannot be read or is invalid.
pub fn initial_settings(schema: Option<&Path>) -> Result<WatchSettings> {
    Ok(match schema {
        Some(path) => WatchSettings::from_schema(&read_schema(path)?),
        None => WatchSettings::from_schema(hellboy_document()),
    })
}

/// Prints the initial watch settings.
///
/// # Errors
/// See [`initial_settings`].
pub fn print_defaults(schema: Option<&Path>, pretty: bool) -> Result<()> {
    print_json(&initial_settings(schema)?, pretty)
}
