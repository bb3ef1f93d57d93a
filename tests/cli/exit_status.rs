//! Exit status and failure reporting

use crate::common::{run_with, FakeCli};
use kube_scanner::scanner::LaunchOutput;
use serial_test::serial;
use std::sync::Arc;

fn failing_pods() -> Arc<FakeCli> {
    Arc::new(FakeCli::new().with_output(
        "pods",
        LaunchOutput::failed(Some(1), "error: You must be logged in to the server (Unauthorized)\n"),
    ))
}

#[tokio::test]
#[serial]
async fn test_scan_failure_is_reported_but_exit_is_clean() {
    let (code, output) = run_with(&["scan", "ns", "pods", "deployments"], failing_pods()).await;

    assert_eq!(code, 0);
    assert!(output.lines().contains(
        &"❌ Error scanning pods: error running oc: exit status 1: error: You must be logged in to the server (Unauthorized)"
            .to_string()
    ));
    assert!(output.lines().contains(&"deployments-0".to_string()));
}

#[tokio::test]
#[serial]
async fn test_fail_on_error_sets_exit_status() {
    let (code, _) = run_with(&["--fail-on-error", "scan", "ns", "pods"], failing_pods()).await;
    assert_eq!(code, 1);
}

#[tokio::test]
#[serial]
async fn test_fail_on_error_ignores_unknown_types() {
    let cli = Arc::new(FakeCli::new());
    let (code, output) = run_with(&["--fail-on-error", "scan", "ns", "pods", "secrets"], cli).await;

    assert_eq!(code, 0);
    assert!(output.lines().contains(&"Unknown resource type: secrets".to_string()));
}

#[tokio::test]
#[serial]
async fn test_alternate_cli_program() {
    let cli = Arc::new(FakeCli::new());
    run_with(&["--cli", "kubectl", "scan", "ns", "deployments"], cli.clone()).await;

    assert_eq!(cli.calls()[0][0], "kubectl");
}
