use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use neo4j_connector::prelude::*;
use neo4j_connector::{Result, Transport};
use serde_json::{json, Value};

/// Keeps every record so tests can look at what the connector logged.
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn install_logger() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

/// Records logged at `level` that mention `needle`. Tests run in parallel, so
/// each one uses its own error codes and filters on them.
fn logged(level: Level, needle: &str) -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, msg)| *l == level && msg.contains(needle))
        .map(|(_, msg)| msg.clone())
        .collect()
}

struct FailingTransport {
    errors: Value,
}

impl Transport for FailingTransport {
    fn post(&self, _: &str, _: &Credentials, _: &Value) -> Result<Value> {
        Ok(json!({"results": [], "errors": self.errors}))
    }
}

fn failing_connector(verbose: bool, errors: Value) -> Connector<FailingTransport> {
    install_logger();
    let config = ConnectorConfig::default().with_verbose_errors(verbose);
    Connector::with_transport(config, FailingTransport { errors })
}

#[test]
fn test_verbose_mode_logs_each_error_at_error_level() {
    let connector = failing_connector(
        true,
        json!([
            {"code": "Verbose.Code.One", "message": "first failure"},
            {"code": "Verbose.Code.Two", "message": "second failure"}
        ]),
    );

    let err = connector.run("MATCH (n) RETURN n", None).unwrap_err();
    assert_eq!(err.server_errors().map(<[ServerError]>::len), Some(2));

    assert_eq!(
        logged(Level::Error, "Verbose.Code."),
        vec![
            "Verbose.Code.One\nfirst failure".to_string(),
            "Verbose.Code.Two\nsecond failure".to_string()
        ]
    );
}

#[test]
fn test_quiet_mode_logs_no_error_records() {
    let connector = failing_connector(false, json!([{"code": "Quiet.Code.One", "message": "hidden failure"}]));

    let err = connector.run("MATCH (n) RETURN n", None).unwrap_err();
    assert_eq!(err.server_errors().map(<[ServerError]>::len), Some(1));

    assert!(logged(Level::Error, "Quiet.Code.One").is_empty());
    assert_eq!(logged(Level::Debug, "Quiet.Code.One").len(), 1);
}
