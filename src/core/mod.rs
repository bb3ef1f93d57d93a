//! Core services and infrastructure

pub mod console;
pub mod error_handling;
pub mod logging;
pub mod styles;
pub mod suggest;
pub mod version;
