//! Unified error types for fraud-pulse.
//!
//! The dashboard has very few fallible operations: dataset validation,
//! preference persistence, config loading, and snapshot rendering.
//! UI-level guards (blank feedback, blank analysis queries) are not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fraud-pulse operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PulseError {
    /// The seeded dataset violates one of its invariants
    #[error("Invalid dataset: {context}")]
    Dataset {
        context: String,
        #[source]
        source: DatasetErrorKind,
    },

    /// Theme preference could not be read or written
    #[error("Preference store error at {path:?}: {message}")]
    Preferences {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot rendering failed
    #[error("Report generation failed: {0}")]
    Report(String),

    /// Configuration failed validation; lists every offending field
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Specific dataset error kinds
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DatasetErrorKind {
    #[error("Duplicate {kind} title: {title}")]
    DuplicateTitle { kind: &'static str, title: String },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("Expected {expected} funnel stages, found {found}")]
    FunnelStageCount { expected: usize, found: usize },

    #[error("Drop-off for stage '{stage}' out of range: {value}")]
    DropOutOfRange { stage: String, value: f64 },
}

/// Convenient Result type for fraud-pulse operations
pub type Result<T> = std::result::Result<T, PulseError>;

impl PulseError {
    /// Create a dataset error with context
    pub fn dataset(context: impl Into<String>, source: DatasetErrorKind) -> Self {
        Self::Dataset {
            context: context.into(),
            source,
        }
    }

    /// Create a preference store error
    pub fn preferences(path: Option<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Preferences {
            path,
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        let message = format!("{err}");
        Self::Io {
            path: None,
            message,
            source: err,
        }
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(format!("JSON serialization failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_error_carries_context() {
        let err = PulseError::dataset(
            "insights",
            DatasetErrorKind::DuplicateTitle {
                kind: "insight",
                title: "Spike in US traffic".to_string(),
            },
        );
        assert_eq!(err.to_string(), "Invalid dataset: insights");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Duplicate insight title: Spike in US traffic")
        );
    }

    #[test]
    fn io_error_converts_without_path() {
        let err: PulseError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, PulseError::Io { path: None, .. }));
    }
}
