//! Scanner Types
//!
//! Shared types used throughout the scanner module.

use super::error::DispatchError;
use super::launcher::ProcessLauncher;
use std::sync::Arc;

/// One requested resource type within a namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub namespace: String,
    pub resource_type: String,
}

impl ScanRequest {
    pub fn new(namespace: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            resource_type: resource_type.into(),
        }
    }
}

/// Everything a scanner factory needs to build a scanner
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// Namespace to inspect
    pub namespace: String,
    /// Cluster CLI program, e.g. `oc` or `kubectl`
    pub cli: String,
    pub launcher: Arc<dyn ProcessLauncher>,
}

impl ScanContext {
    pub fn new(
        namespace: impl Into<String>,
        cli: impl Into<String>,
        launcher: Arc<dyn ProcessLauncher>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            cli: cli.into(),
            launcher,
        }
    }
}

/// What a finished scan task reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub resource_type: String,
    pub success: bool,
    /// Captured CLI output on success, the error text on failure
    pub message: String,
}

impl ScanOutcome {
    pub fn success(resource_type: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            success: true,
            message: output.into(),
        }
    }

    pub fn failure(resource_type: impl Into<String>, error: impl ToString) -> Self {
        Self {
            resource_type: resource_type.into(),
            success: false,
            message: error.to_string(),
        }
    }
}

/// Aggregated result of one orchestrated run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// One entry per launched scan task, in launch order
    pub outcomes: Vec<ScanOutcome>,
    /// Requested resource types that never became a task
    pub unresolved: Vec<DispatchError>,
}

impl ScanSummary {
    pub fn launched(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.launched() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}
