//! At the default level, failures the console already shows stay out of the log
//!
//! Lives in its own test binary because the global logger can only be
//! initialised once per process.

mod common;

use common::{run_with, FakeCli};
use kube_scanner::core::logging::{init_logging, DEFAULT_LOG_LEVEL};
use kube_scanner::scanner::LaunchOutput;
use std::fs;
use std::sync::Arc;

#[tokio::test]
async fn test_typos_and_failed_scans_do_not_log_at_default_level() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("scan.log");
    init_logging(Some(DEFAULT_LOG_LEVEL), None, Some(&log_path), false)
        .expect("logger should start");

    let cli = Arc::new(
        FakeCli::new().with_output("pods", LaunchOutput::failed(Some(1), "Forbidden\n")),
    );
    let (code, output) = run_with(&["scan", "demo-ns", "pods", "deploymnets"], cli).await;

    assert_eq!(code, 0);
    let lines = output.lines();
    assert!(lines.contains(&"Unknown resource type: deploymnets".to_string()));
    assert!(lines.contains(&"❌ Error scanning pods: error running oc: exit status 1: Forbidden".to_string()));

    let logged: String = fs::read_dir(dir.path())
        .expect("read temp dir")
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| fs::read_to_string(entry.path()).ok())
        .collect();
    assert!(logged.is_empty(), "unexpected log records: {:?}", logged);
}
