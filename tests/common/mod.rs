//! Common test utilities
//!
//! A fake cluster CLI for integration tests: it records every invocation
//! and answers per resource kind without spawning anything.

#![allow(dead_code)]

use async_trait::async_trait;
use kube_scanner::app::cli::args::Args;
use kube_scanner::core::console::{CaptureBuffer, Console};
use kube_scanner::scanner::{LaunchOutput, ProcessLauncher};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct FakeCli {
    calls: Mutex<Vec<Vec<String>>>,
    outputs: HashMap<String, LaunchOutput>,
}

impl FakeCli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, kind: &str, output: LaunchOutput) -> Self {
        self.outputs.insert(kind.to_string(), output);
        self
    }

    /// Recorded invocations, program name first
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessLauncher for FakeCli {
    async fn launch(&self, program: &str, args: &[String]) -> io::Result<LaunchOutput> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.lock().unwrap().push(call);

        let kind = args.get(1).map(String::as_str).unwrap_or_default();
        Ok(self
            .outputs
            .get(kind)
            .cloned()
            .unwrap_or_else(|| LaunchOutput::succeeded(format!("NAME\n{}-0\n", kind))))
    }
}

/// Run the tool with `argv` (without the program name) against a fake CLI
pub async fn run_with(argv: &[&str], cli: Arc<FakeCli>) -> (u8, CaptureBuffer) {
    use clap::Parser;

    let mut full = vec!["kube-scanner"];
    full.extend_from_slice(argv);
    let args = Args::try_parse_from(full).expect("arguments should parse");

    let (console, buffer) = Console::capture();
    let code = kube_scanner::app::startup::run(args, cli, console).await;
    (code, buffer)
}

pub fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
