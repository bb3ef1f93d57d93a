//! Resource-type registry
//!
//! Maps resource-type keywords to factories building the matching scanner.
//! Built once at startup and only read afterwards.

use super::error::{DispatchError, RegistryError, RegistryResult};
use super::launcher::ProcessLauncher;
use super::resources::{DeploymentScanner, PodScanner, Scanner};
use super::types::{ScanContext, ScanRequest};
use crate::core::suggest::suggest_closest;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Builds a scanner for the namespace carried by the context
pub type ScannerFactory = Box<dyn Fn(ScanContext) -> Box<dyn Scanner> + Send + Sync>;

fn factory<F>(build: F) -> ScannerFactory
where
    F: Fn(ScanContext) -> Box<dyn Scanner> + Send + Sync + 'static,
{
    Box::new(build)
}

pub struct ScannerRegistry {
    factories: BTreeMap<String, ScannerFactory>,
}

impl std::fmt::Debug for ScannerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannerRegistry")
            .field("resource_types", &self.names())
            .finish()
    }
}

impl Default for ScannerRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl ScannerRegistry {
    /// Create a registry with no resource types
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in `pods` and `deployments` scanners
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        let builtin: [(&str, ScannerFactory); 2] = [
            ("pods", factory(|ctx| Box::new(PodScanner::new(ctx)))),
            (
                "deployments",
                factory(|ctx| Box::new(DeploymentScanner::new(ctx))),
            ),
        ];
        for (name, factory) in builtin {
            registry.factories.insert(name.to_string(), factory);
        }
        registry
    }

    /// Add a resource type; names must be unique
    pub fn register<F>(&mut self, name: impl Into<String>, build: F) -> RegistryResult<()>
    where
        F: Fn(ScanContext) -> Box<dyn Scanner> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.factories.insert(name, Box::new(build));
        Ok(())
    }

    /// Exact, case-sensitive lookup
    pub fn resolve(&self, resource_type: &str) -> Option<&ScannerFactory> {
        self.factories.get(resource_type)
    }

    /// Registered resource types in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build the scanner for a request, or explain why there is none
    pub fn build(
        &self,
        request: &ScanRequest,
        cli: &str,
        launcher: Arc<dyn ProcessLauncher>,
    ) -> Result<Box<dyn Scanner>, DispatchError> {
        match self.resolve(&request.resource_type) {
            Some(factory) => Ok(factory(ScanContext::new(
                request.namespace.clone(),
                cli,
                launcher,
            ))),
            None => Err(DispatchError::UnknownResourceType {
                resource_type: request.resource_type.clone(),
                suggestion: suggest_closest(&request.resource_type, self.names()),
            }),
        }
    }
}
