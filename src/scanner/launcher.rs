//! Process launching
//!
//! Scanners never spawn processes themselves; they go through a
//! [`ProcessLauncher`] handed to them at construction so tests can stand in
//! for the cluster CLI.

use async_trait::async_trait;
use std::fmt::Debug;
use std::io;

/// Captured result of one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutput {
    /// Whether the process exited successfully
    pub success: bool,
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// Standard output followed by standard error
    pub output: String,
}

impl LaunchOutput {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            output: output.into(),
        }
    }

    pub fn failed(code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            output: output.into(),
        }
    }
}

/// Capability to run an external program to completion
#[async_trait]
pub trait ProcessLauncher: Send + Sync + Debug {
    /// Run `program` with `args` and capture its combined output
    ///
    /// An `Err` means the program could not be run at all; a program that
    /// ran and failed is reported through [`LaunchOutput::success`].
    async fn launch(&self, program: &str, args: &[String]) -> io::Result<LaunchOutput>;
}

/// Launcher backed by real subprocesses
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

#[async_trait]
impl ProcessLauncher for SystemLauncher {
    async fn launch(&self, program: &str, args: &[String]) -> io::Result<LaunchOutput> {
        log::debug!("launching {} {}", program, args.join(" "));

        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        log::trace!(
            "{} exited with {:?} ({} bytes of output)",
            program,
            output.status.code(),
            text.len()
        );

        Ok(LaunchOutput {
            success: output.status.success(),
            code: output.status.code(),
            output: text,
        })
    }
}
