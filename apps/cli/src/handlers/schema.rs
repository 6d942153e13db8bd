use crate::services::io::print_json;
use anyhow::Result;
use wfh::hellboy_document;

/// Prints the built-in settings page.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn print_schema(pretty: bool) -> Result<()> {
    print_json(hellboy_document(), pretty)
}
