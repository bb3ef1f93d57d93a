//! Documented end-to-end scenarios

use crate::common::{run_with, strings, FakeCli};
use kube_scanner::app::cli::args::USAGE;
use serial_test::serial;
use std::sync::Arc;

const COMPLETED: &str = "✅ All scans completed.";

#[tokio::test]
#[serial]
async fn test_scan_single_resource_type() {
    let cli = Arc::new(FakeCli::new());

    let (code, output) = run_with(&["scan", "demo-ns", "pods"], cli.clone()).await;

    assert_eq!(code, 0);
    assert_eq!(
        cli.calls(),
        vec![strings(&["oc", "get", "pods", "-n", "demo-ns", "-o", "wide"])]
    );

    let lines = output.lines();
    let start = lines
        .iter()
        .position(|l| l == "🔍 Scanning pods in namespace 'demo-ns'...")
        .expect("start message");
    let captured = lines.iter().position(|l| l == "pods-0").expect("captured output");
    let done = lines.iter().position(|l| l == COMPLETED).expect("completion");
    assert!(start < captured && captured < done, "order: {:?}", lines);
}

#[tokio::test]
#[serial]
async fn test_typo_gets_suggestion_and_valid_type_still_scans() {
    let cli = Arc::new(FakeCli::new());

    let (code, output) = run_with(&["scan", "demo-ns", "pods", "deploymnets"], cli.clone()).await;

    assert_eq!(code, 0);
    assert_eq!(cli.calls().len(), 1);
    assert_eq!(cli.calls()[0][2], "pods");

    let lines = output.lines();
    assert!(lines.contains(&"Unknown resource type: deploymnets".to_string()));
    assert!(lines.contains(&"Did you mean: deployments ?".to_string()));
    assert!(lines.contains(&"🔍 Scanning pods in namespace 'demo-ns'...".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some(COMPLETED));
}

#[tokio::test]
#[serial]
async fn test_no_resource_types_completes_without_scanning() {
    let cli = Arc::new(FakeCli::new());

    let (code, output) = run_with(&["scan", "demo-ns"], cli.clone()).await;

    assert_eq!(code, 0);
    assert!(cli.calls().is_empty());
    assert!(!output.contents().contains("🔍"));
    assert_eq!(output.lines().last().map(String::as_str), Some(COMPLETED));
}

#[tokio::test]
#[serial]
async fn test_too_few_arguments_prints_usage() {
    let cli = Arc::new(FakeCli::new());

    let (code, output) = run_with(&["scan"], cli.clone()).await;

    assert_eq!(code, 0);
    assert!(cli.calls().is_empty());
    assert_eq!(output.lines(), vec![USAGE.to_string()]);
}

#[tokio::test]
#[serial]
async fn test_every_requested_type_completes_before_final_message() {
    let cli = Arc::new(FakeCli::new());
    let requested = ["pods", "deployments", "pods", "deployments", "pods"];
    let mut argv = vec!["scan", "busy-ns"];
    argv.extend_from_slice(&requested);

    let (_, output) = run_with(&argv, cli.clone()).await;

    assert_eq!(cli.calls().len(), requested.len());
    let lines = output.lines();
    let done = lines.iter().position(|l| l == COMPLETED).unwrap();
    let captured = lines[..done]
        .iter()
        .filter(|l| *l == "pods-0" || *l == "deployments-0")
        .count();
    assert_eq!(captured, requested.len());
}

#[tokio::test]
#[serial]
async fn test_hyphenated_resource_type_is_reported_not_fatal() {
    let cli = Arc::new(FakeCli::new());

    let (code, output) = run_with(&["scan", "demo-ns", "pods", "-x"], cli.clone()).await;

    assert_eq!(code, 0);
    assert_eq!(
        cli.calls(),
        vec![strings(&["oc", "get", "pods", "-n", "demo-ns", "-o", "wide"])]
    );
    let lines = output.lines();
    assert!(lines.contains(&"Unknown resource type: -x".to_string()));
    assert!(lines.contains(&"pods-0".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some(COMPLETED));
}

#[tokio::test]
#[serial]
async fn test_hyphenated_namespace_is_passed_through() {
    let cli = Arc::new(FakeCli::new());

    let (code, _) = run_with(&["scan", "-n", "pods"], cli.clone()).await;

    assert_eq!(code, 0);
    assert_eq!(
        cli.calls(),
        vec![strings(&["oc", "get", "pods", "-n", "-n", "-o", "wide"])]
    );
}
