use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use wfh_logger::{LevelFilter, Logger};

#[test]
fn file_logging_writes_a_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("wfh-file-logging")
        .console(false)
        .path(&log_dir)
        .json(true)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.has_file_sink());

    tracing::info!(message_key = "show_weekday", "applied inbound setting");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("show_weekday"), "record should reach the file sink");

    Ok(())
}
