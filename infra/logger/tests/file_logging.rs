use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use vencfg_logger::{LevelFilter, Logger};

#[test]
fn file_logging_creates_log_files() {
    let tmp_dir = tempdir().expect("temp dir");
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("test-app")
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger init");

    tracing::info!("hello world");
    // Give the background worker a moment to flush.
    std::thread::sleep(Duration::from_millis(20));

    assert!(log_dir.exists(), "log directory should be created by logger init");

    let has_log = fs::read_dir(&log_dir)
        .expect("read log dir")
        .flatten()
        .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
    assert!(has_log, "at least one log file should be created");

    drop(logger);
}
