//! Scanner Error Types

use crate::core::error_handling::ContextualError;

/// Failure of a single resource scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The cluster CLI ran but reported failure
    #[error("error running {tool}: {}", failure_detail(.code, .output))]
    CommandFailed {
        tool: String,
        code: Option<i32>,
        output: String,
    },

    /// The cluster CLI could not be started or its output could not be read
    #[error("error running {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The task driving the scan ended abnormally
    #[error("scan task for {resource_type} did not complete: {message}")]
    TaskAborted {
        resource_type: String,
        message: String,
    },
}

fn failure_detail(code: &Option<i32>, output: &str) -> String {
    let status = match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    };
    let output = output.trim();
    if output.is_empty() {
        status
    } else {
        format!("{}: {}", status, output)
    }
}

impl ContextualError for ScanError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, ScanError::Launch { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    fn user_message(&self) -> Option<String> {
        match self {
            ScanError::Launch { tool, source } if source.kind() == std::io::ErrorKind::NotFound => {
                Some(format!(
                    "'{}' was not found; install it or select another CLI with --cli",
                    tool
                ))
            }
            _ => None,
        }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;

/// A requested resource type that could not be turned into a scanner
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown resource type: {resource_type}")]
    UnknownResourceType {
        resource_type: String,
        suggestion: Option<String>,
    },
}

impl DispatchError {
    pub fn resource_type(&self) -> &str {
        match self {
            DispatchError::UnknownResourceType { resource_type, .. } => resource_type,
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            DispatchError::UnknownResourceType { suggestion, .. } => suggestion.as_deref(),
        }
    }
}

impl ContextualError for DispatchError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        match self.suggestion() {
            Some(suggestion) => Some(format!("{} (did you mean '{}'?)", self, suggestion)),
            None => Some(self.to_string()),
        }
    }
}

/// Registry construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Resource type '{name}' is already registered")]
    Duplicate { name: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
