//! Unit tests for engine.rs
//!
//! Tests the global logger registry and the error/bail macros.
//! All tests are marked with #[serial] because they swap the global logger.
//! Other unit tests may log concurrently, so assertions filter by source.

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::log::{Logger, LogEntry, LogSeverity};
use serial_test::serial;
use std::sync::{Arc, Mutex};

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

// ============================================================================
// LOGGER REGISTRY
// ============================================================================

#[test]
#[serial]
fn test_log_reaches_custom_logger() {
    let entries = install_capture();

    Engine::log(LogSeverity::Warn, "test::engine_log", "near plane clamped".to_string());

    let captured = from_source(&entries, "test::engine_log");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert_eq!(captured[0].message, "near plane clamped");
    assert!(captured[0].file.is_none());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let entries = install_capture();

    Engine::log_detailed(
        LogSeverity::Error,
        "test::engine_detailed",
        "bad projection".to_string(),
        "camera.rs",
        12,
    );

    let captured = from_source(&entries, "test::engine_detailed");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("camera.rs"));
    assert_eq!(captured[0].line, Some(12));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let entries = install_capture();
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "test::engine_reset", "after reset".to_string());

    assert!(from_source(&entries, "test::engine_reset").is_empty());
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
#[serial]
fn test_engine_err_macro_logs_and_builds_error() {
    let entries = install_capture();

    let err = crate::engine_err!(InvalidParameter, "test::engine_err", "far = {}", 0.5);

    assert_eq!(err, Error::InvalidParameter("far = 0.5".to_string()));
    let captured = from_source(&entries, "test::engine_err");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert!(captured[0].line.is_some());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_bail_macro_returns_early() {
    fn rejects(value: f32) -> Result<f32> {
        if value < 0.0 {
            crate::engine_bail!(InvalidParameter, "test::engine_bail", "negative: {}", value);
        }
        Ok(value * 2.0)
    }

    let entries = install_capture();

    assert_eq!(rejects(2.0).unwrap(), 4.0);
    assert!(matches!(rejects(-1.0), Err(Error::InvalidParameter(_))));
    assert_eq!(from_source(&entries, "test::engine_bail").len(), 1);

    Engine::reset_logger();
}
