//! Resource scanners
//!
//! Each scanner runs `<cli> get <kind> -n <namespace> -o wide` once and
//! hands back whatever the CLI printed.

use super::error::{ScanError, ScanResult};
use super::types::ScanContext;
use async_trait::async_trait;

/// One inspection of one resource kind in one namespace
#[async_trait]
pub trait Scanner: Send + Sync + std::fmt::Debug {
    /// Resource kind passed to the cluster CLI
    fn kind(&self) -> &'static str;

    fn context(&self) -> &ScanContext;

    fn namespace(&self) -> &str {
        &self.context().namespace
    }

    /// Arguments passed to the cluster CLI, without the program name
    fn command_args(&self) -> Vec<String> {
        [
            "get",
            self.kind(),
            "-n",
            self.namespace(),
            "-o",
            "wide",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Run the CLI and return its captured output
    async fn scan(&self) -> ScanResult<String> {
        run_cli(self.context(), self.command_args()).await
    }
}

async fn run_cli(context: &ScanContext, args: Vec<String>) -> ScanResult<String> {
    let launched = context
        .launcher
        .launch(&context.cli, &args)
        .await
        .map_err(|source| ScanError::Launch {
            tool: context.cli.clone(),
            source,
        })?;

    if launched.success {
        Ok(launched.output)
    } else {
        Err(ScanError::CommandFailed {
            tool: context.cli.clone(),
            code: launched.code,
            output: launched.output,
        })
    }
}

/// Lists pods in a namespace
#[derive(Debug, Clone)]
pub struct PodScanner {
    context: ScanContext,
}

impl PodScanner {
    pub fn new(context: ScanContext) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Scanner for PodScanner {
    fn kind(&self) -> &'static str {
        "pods"
    }

    fn context(&self) -> &ScanContext {
        &self.context
    }
}

/// Lists deployments in a namespace
#[derive(Debug, Clone)]
pub struct DeploymentScanner {
    context: ScanContext,
}

impl DeploymentScanner {
    pub fn new(context: ScanContext) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Scanner for DeploymentScanner {
    fn kind(&self) -> &'static str {
        "deployments"
    }

    fn context(&self) -> &ScanContext {
        &self.context
    }
}
