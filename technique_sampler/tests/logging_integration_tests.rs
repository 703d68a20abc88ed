//! Integration tests for the logging system
//!
//! Verify that scene failures reach a custom logger with the right
//! severity and source. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use std::sync::{Arc, Mutex};
use std::time::Duration;
use serial_test::serial;
use technique_sampler::render::RecordingBackend;
use technique_sampler::sampler::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use technique_sampler::sampler::{Engine, FrameOutcome, FrameSequencer, SceneConfig};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures entries from the frame sequencer
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == "sampler::FrameSequencer" {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

fn capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::set_min_severity(LogSeverity::Trace);
    entries
}

fn restore() {
    Engine::reset_logger();
    Engine::set_min_severity(LogSeverity::Debug);
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_scene_ready_is_logged() {
    let entries = capture();
    let _sequencer = FrameSequencer::new(SceneConfig::gimbal(), RecordingBackend::new()).unwrap();
    let entries = entries.lock().unwrap().clone();
    restore();

    let ready = entries.iter().find(|e| e.message.starts_with("Scene ready")).unwrap();
    assert_eq!(ready.severity, LogSeverity::Info);
    assert!(ready.message.contains("gimbal"));
}

#[test]
#[serial]
fn test_integration_dropped_frame_logged_as_error() {
    let mut sequencer = FrameSequencer::new(SceneConfig::lit_box(), RecordingBackend::new()).unwrap();
    sequencer.backend_mut().fail_next_draw();

    let entries = capture();
    let outcome = sequencer.advance(Duration::from_millis(16)).unwrap();
    let entries = entries.lock().unwrap().clone();
    restore();

    assert_eq!(outcome, FrameOutcome::Dropped);
    let error = entries.iter().find(|e| e.severity == LogSeverity::Error).unwrap();
    assert!(error.message.starts_with("Frame dropped"));
    assert!(error.file.is_some());
    assert!(error.line.is_some());
}

#[test]
#[serial]
fn test_integration_device_loss_logged() {
    let mut sequencer = FrameSequencer::new(SceneConfig::lit_box(), RecordingBackend::new()).unwrap();
    sequencer.advance(Duration::from_millis(16)).unwrap();
    sequencer.backend_mut().lose_device();

    let entries = capture();
    sequencer.advance(Duration::from_millis(16)).unwrap();
    let entries = entries.lock().unwrap().clone();
    restore();

    let severities: Vec<LogSeverity> = entries.iter().map(|e| e.severity).collect();
    assert!(severities.contains(&LogSeverity::Warn));
    assert!(entries.iter().any(|e| e.message.starts_with("Device restored")));
}

#[test]
fn test_integration_default_logger_format() {
    let entry = LogEntry {
        severity: LogSeverity::Warn,
        timestamp: std::time::SystemTime::now(),
        source: "sampler::FrameSequencer".to_string(),
        message: "Device lost".to_string(),
        file: None,
        line: None,
    };
    let line = DefaultLogger::format_plain(&entry);
    assert!(line.contains("[WARN ]"));
    assert!(line.ends_with("[sampler::FrameSequencer] Device lost"));
}
