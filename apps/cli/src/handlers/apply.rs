use crate::handlers::defaults::initial_settings;
use crate::services::io::{print_json, read_text};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::Path;
use wfh::{ClockFace, ClockStyle, SettingsMessage, WatchSettings};

#[derive(Debug, Serialize)]
struct ApplyReport {
    settings: WatchSettings,
    changed: Vec<&'static str>,
    message: SettingsMessage,
    face: ClockFace,
}

/// Applies a settings message file to the initial settings and prints the outcome.
///
/// # Errors
/// Returns an error if a file cannot be read, the message is malformed, or a known key
/// carries an unusable value.
pub fn apply_payload(
    payload: &Path,
    schema: Option<&Path>,
    at: Option<NaiveDateTime>,
    twelve_hour: bool,
    pretty: bool,
) -> Result<()> {
    let message = SettingsMessage::from_json(&read_text(payload)?)
        .with_context(|| format!("Invalid settings message in {}", payload.display()))?;

    let mut settings = initial_settings(schema)?;
    let changed = settings.apply(&message)?;

    let style = if twelve_hour { ClockStyle::TwelveHour } else { ClockStyle::TwentyFourHour };
    let at = at.unwrap_or_else(|| Local::now().naive_local());

    let report = ApplyReport {
        settings,
        changed: changed.iter().filter_map(|flag| flag.message_key()).collect(),
        message: settings.to_message(),
        face: ClockFace::render(&settings, style, at),
    };
    print_json(&report, pretty)
}
