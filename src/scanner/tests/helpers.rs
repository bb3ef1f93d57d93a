//! Test helpers for scanner unit tests
//!
//! These are separate from the integration test helpers in tests/common/
//! since unit tests and integration tests build against different crates.

use crate::scanner::launcher::{LaunchOutput, ProcessLauncher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// Scripted reply for a launch
#[derive(Debug, Clone)]
pub enum Reply {
    Output(LaunchOutput),
    LaunchError(io::ErrorKind, String),
}

/// Fake launcher that records every invocation and answers per resource kind
///
/// The kind is the second CLI argument (`get <kind> ...`). Kinds without a
/// scripted reply succeed with `mock output for <kind>`.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    replies: HashMap<String, Reply>,
    barrier: Option<Arc<Barrier>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, kind: &str, reply: Reply) -> Self {
        self.replies.insert(kind.to_string(), reply);
        self
    }

    pub fn fail(self, kind: &str, code: i32, output: &str) -> Self {
        self.reply(kind, Reply::Output(LaunchOutput::failed(Some(code), output)))
    }

    /// Every launch waits until `parties` launches are in flight at once
    pub fn rendezvous(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessLauncher for RecordingLauncher {
    async fn launch(&self, program: &str, args: &[String]) -> io::Result<LaunchOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let kind = args.get(1).cloned().unwrap_or_default();
        match self.replies.get(&kind) {
            Some(Reply::Output(output)) => Ok(output.clone()),
            Some(Reply::LaunchError(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Ok(LaunchOutput::succeeded(format!("mock output for {}", kind))),
        }
    }
}

pub fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
