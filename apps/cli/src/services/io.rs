use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use wfh::SchemaDocument;

/// Reads a whole text file, naming it in the error.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Loads and validates a schema file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid schema.
pub fn read_schema(path: &Path) -> Result<SchemaDocument> {
    let json = read_text(path)?;
    SchemaDocument::from_json(&json)
        .with_context(|| format!("Invalid schema in {}", path.display()))
}

/// Writes `value` to stdout as JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
