use shutter_domain::config::LoggingConfig;
use shutter_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_logging_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        json: true,
        path: Some(log_dir.clone()),
        ..LoggingConfig::default()
    };

    let logger = Logger::from_config("integration-file-logging", &config)?.console(false).init()?;
    assert!(logger.guard().is_some());

    tracing::info!(pair = "Api.Post -> Photo", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(!contents.is_empty(), "log file should not be empty");
    assert!(
        contents.lines().all(|line| line.starts_with('{')),
        "file output should be JSON lines: {contents}"
    );
    assert!(contents.contains("hello from integration test"));

    Ok(())
}
