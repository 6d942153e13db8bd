use crate::services::io::{print_json, read_schema};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Validates a schema file and prints its summary.
///
/// # Errors
/// Returns an error if the file cannot be read or fails validation.
pub fn validate_file(path: &Path, pretty: bool) -> Result<()> {
    let document = read_schema(path)?;
    let summary = document.summary();
    info!(file = %path.display(), toggles = summary.toggles, "Schema is valid");
    print_json(&summary, pretty)
}
