//! Scan orchestration
//!
//! The manager turns requested resource types into scanners, runs one
//! tokio task per scanner and waits for every task before reporting
//! completion:
//!
//! 1. **Dispatch**: every requested type is resolved through the registry.
//!    Unknown types are reported (with a suggestion when one is close) and
//!    skipped. All dispatch diagnostics are written before any task starts.
//! 2. **Launch**: one task per resolved scanner, no concurrency limit.
//! 3. **Join**: every task is awaited; its [`ScanOutcome`] is collected into
//!    the returned [`ScanSummary`].

use super::error::{DispatchError, ScanError};
use super::launcher::ProcessLauncher;
use super::registry::ScannerRegistry;
use super::resources::Scanner;
use super::types::{ScanOutcome, ScanRequest, ScanSummary};
use crate::core::console::Console;
use crate::core::error_handling::log_error_with_context;
use crate::core::styles::StyleRole;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const WAITING_MESSAGE: &str = "⏳ Waiting for scans to complete...";
pub const COMPLETED_MESSAGE: &str = "✅ All scans completed.";

/// Log level for failures the console has already reported
pub const REPORTED_ERROR_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone)]
pub struct ScanManager {
    registry: Arc<ScannerRegistry>,
    launcher: Arc<dyn ProcessLauncher>,
    cli: String,
    console: Console,
}

impl ScanManager {
    pub fn new(
        registry: Arc<ScannerRegistry>,
        launcher: Arc<dyn ProcessLauncher>,
        cli: impl Into<String>,
        console: Console,
    ) -> Self {
        Self {
            registry,
            launcher,
            cli: cli.into(),
            console,
        }
    }

    pub fn registry(&self) -> &ScannerRegistry {
        &self.registry
    }

    /// Resolve every requested resource type, reporting the ones that fail
    ///
    /// Scanners come back in request order; a bad type never stops the
    /// remaining ones from resolving.
    pub fn dispatch(
        &self,
        namespace: &str,
        resource_types: &[String],
    ) -> (Vec<(String, Box<dyn Scanner>)>, Vec<DispatchError>) {
        let mut scanners = Vec::with_capacity(resource_types.len());
        let mut unresolved = Vec::new();

        for resource_type in resource_types {
            let request = ScanRequest::new(namespace, resource_type.as_str());
            match self
                .registry
                .build(&request, &self.cli, Arc::clone(&self.launcher))
            {
                Ok(scanner) => {
                    log::debug!("resolved '{}' in namespace '{}'", resource_type, namespace);
                    scanners.push((resource_type.clone(), scanner));
                }
                Err(err) => {
                    self.report_unresolved(&err);
                    unresolved.push(err);
                }
            }
        }

        (scanners, unresolved)
    }

    fn report_unresolved(&self, err: &DispatchError) {
        log_error_with_context(err, "Dispatch", REPORTED_ERROR_LEVEL);
        self.console.line(StyleRole::Warning, &err.to_string());
        if let Some(suggestion) = err.suggestion() {
            self.console
                .line(StyleRole::Warning, &format!("Did you mean: {} ?", suggestion));
        }
    }

    /// Scan every requested resource type concurrently and wait for all of them
    pub async fn run(&self, namespace: &str, resource_types: &[String]) -> ScanSummary {
        let (scanners, unresolved) = self.dispatch(namespace, resource_types);

        log::info!(
            "launching {} scan(s) in namespace '{}'",
            scanners.len(),
            namespace
        );

        let handles: Vec<(String, JoinHandle<ScanOutcome>)> = scanners
            .into_iter()
            .map(|(resource_type, scanner)| {
                let handle = tokio::spawn(scan_task(
                    resource_type.clone(),
                    scanner,
                    self.console.clone(),
                ));
                (resource_type, handle)
            })
            .collect();

        self.console.line(StyleRole::Dim, WAITING_MESSAGE);

        let mut outcomes = Vec::with_capacity(handles.len());
        for (resource_type, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    let err = ScanError::TaskAborted {
                        resource_type: resource_type.clone(),
                        message: join_error.to_string(),
                    };
                    self.console.line(
                        StyleRole::Error,
                        &format!("❌ Error scanning {}: {}", resource_type, err),
                    );
                    ScanOutcome::failure(resource_type, err)
                }
            };
            outcomes.push(outcome);
        }

        let summary = ScanSummary {
            outcomes,
            unresolved,
        };
        log::info!(
            "{} scan(s) finished: {} succeeded, {} failed, {} unresolved",
            summary.launched(),
            summary.succeeded(),
            summary.failed(),
            summary.unresolved.len()
        );

        self.console.line(StyleRole::Success, COMPLETED_MESSAGE);
        summary
    }
}

async fn scan_task(
    resource_type: String,
    scanner: Box<dyn Scanner>,
    console: Console,
) -> ScanOutcome {
    console.line(
        StyleRole::Accent,
        &format!(
            "🔍 Scanning {} in namespace '{}'...",
            resource_type,
            scanner.namespace()
        ),
    );

    match scanner.scan().await {
        Ok(output) => {
            console.raw(&output);
            ScanOutcome::success(resource_type, output)
        }
        Err(err) => {
            log_error_with_context(
                &err,
                &format!("Scanning {}", resource_type),
                REPORTED_ERROR_LEVEL,
            );
            console.line(
                StyleRole::Error,
                &format!("❌ Error scanning {}: {}", resource_type, err),
            );
            ScanOutcome::failure(resource_type, err)
        }
    }
}
