//! Command-line arguments
//!
//! Positional arguments follow `<command> <namespace> [<resource-type> ...]`.
//! Global flags configure logging, colour and the cluster CLI; each has an
//! environment-variable fallback so the tool needs no configuration file.
//!
//! The namespace and resource types accept values starting with `-`, so a
//! stray `-x` becomes an unknown resource type instead of a parse error.
//! Everything after the first resource type is taken as a resource type.

use crate::core::error_handling::ContextualError;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const SCAN_COMMAND: &str = "scan";

pub const USAGE: &str = "Usage: kube-scanner scan <namespace> <resource-type> [<resource-type>...]";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "kube-scanner")]
#[command(about = "Concurrently inspect cluster resources in a namespace")]
#[command(version, long_version = crate::core::version::long_version())]
#[command(after_help = "Supported resource types: pods, deployments")]
pub struct Args {
    /// Command to run (only `scan` is supported)
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Namespace to inspect
    #[arg(value_name = "NAMESPACE", allow_hyphen_values = true)]
    pub namespace: Option<String>,

    /// Resource types to scan
    #[arg(value_name = "RESOURCE_TYPE", allow_hyphen_values = true)]
    pub resource_types: Vec<String>,

    /// Cluster CLI program to invoke (defaults to the build-time default, usually `oc`)
    #[arg(long = "cli", value_name = "PROGRAM", env = "KUBE_SCANNER_CLI")]
    pub cli: Option<String>,

    /// Exit with status 1 when any scan fails
    #[arg(
        long = "fail-on-error",
        env = "KUBE_SCANNER_FAIL_ON_ERROR",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub fail_on_error: bool,

    /// Verbose output (can be used multiple times for more verbosity)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (can be used multiple times for less verbosity)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Log level (overrides -v/-q)
    #[arg(long = "log-level", value_name = "LEVEL", env = "KUBE_SCANNER_LOG_LEVEL",
          value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", env = "KUBE_SCANNER_LOG_FORMAT",
          value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE", env = "KUBE_SCANNER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,
}

/// Validated positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInvocation {
    pub namespace: String,
    pub resource_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("expected a command and a namespace")]
    MissingArguments,

    #[error("supported command is 'scan'")]
    UnsupportedCommand { command: String },
}

impl ContextualError for UsageError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        match self {
            UsageError::MissingArguments => Some(USAGE.to_string()),
            UsageError::UnsupportedCommand { command } => {
                Some(format!("unknown command '{}': {}", command, self))
            }
        }
    }
}

impl Args {
    /// Check the positional arguments and split out the scan request
    ///
    /// A missing resource-type list is allowed; the run then launches
    /// nothing and only reports completion.
    pub fn invocation(&self) -> Result<ScanInvocation, UsageError> {
        let (command, namespace) = match (&self.command, &self.namespace) {
            (Some(command), Some(namespace)) => (command, namespace),
            _ => return Err(UsageError::MissingArguments),
        };

        if command != SCAN_COMMAND {
            return Err(UsageError::UnsupportedCommand {
                command: command.clone(),
            });
        }

        Ok(ScanInvocation {
            namespace: namespace.clone(),
            resource_types: self.resource_types.clone(),
        })
    }

    /// Cluster CLI to run
    pub fn cli_program(&self) -> String {
        self.cli
            .clone()
            .filter(|cli| !cli.trim().is_empty())
            .unwrap_or_else(|| crate::core::version::default_cli().to_string())
    }

    /// Effective log level from `--log-level` or the verbosity counters
    pub fn effective_log_level(&self) -> String {
        self.log_level.clone().unwrap_or_else(|| {
            crate::core::logging::level_for_verbosity(self.verbose, self.quiet).to_string()
        })
    }

    /// Log file, with `none` meaning no file
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .filter(|path| path.as_os_str() != "none")
    }
}
