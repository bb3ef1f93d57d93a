//! Scanner Component
//!
//! Resource scanners, the registry that maps resource-type keywords onto
//! them, and the manager that runs one concurrent task per requested type.
//!
//! ## Core Features
//!
//! - **ScannerRegistry**: exact-match dispatch with "did you mean" fallback
//! - **Injectable launcher**: scanners reach the cluster CLI only through
//!   [`ProcessLauncher`], so tests can substitute it
//! - **ScanManager**: fan-out/fan-in over tokio tasks with a full join
//!   before completion is reported

pub mod error;
pub mod launcher;
pub mod manager;
pub mod registry;
pub mod resources;
pub mod types;

pub use error::{DispatchError, RegistryError, ScanError, ScanResult};
pub use launcher::{LaunchOutput, ProcessLauncher, SystemLauncher};
pub use manager::ScanManager;
pub use registry::{ScannerFactory, ScannerRegistry};
pub use resources::{DeploymentScanner, PodScanner, Scanner};
pub use types::{ScanContext, ScanOutcome, ScanRequest, ScanSummary};

#[cfg(test)]
pub(crate) mod tests;
