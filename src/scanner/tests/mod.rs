//! Test modules for the scanner system
//!
//! Suites for the scanners, the registry and the manager. All of them run
//! against fake launchers from `helpers`; no cluster CLI is needed.

pub mod helpers;
