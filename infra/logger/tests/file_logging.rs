use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use vf_logger::{LevelFilter, Logger, LoggerError};

#[test]
#[serial]
fn file_only_logger_writes_json_records() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("integration-file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .json()
        .init()?;

    assert!(logger.guard().is_some());
    tracing::info!(vehicle = "Car", "order completed");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("order completed"), "log file should contain the record");
    assert!(contents.trim_start().starts_with('{'), "records should be JSON");

    Ok(())
}

#[test]
#[serial]
fn disabling_every_layer_is_rejected() {
    let err = Logger::builder()
        .name("integration-no-layers")
        .console(false)
        .init()
        .expect_err("a logger without layers must not initialize");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
