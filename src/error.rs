//! Error types for multi-value element processing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or driving a multi-value element.
#[derive(Debug, Error)]
pub enum ElementError {
    /// Default value does not have an indexable shape.
    #[error("malformed default value at '{path}': {reason}")]
    MalformedDefault { path: String, reason: String },

    /// Session slot holds something that is not an element state.
    #[error("corrupt element state at '{key}': {source}")]
    CorruptState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// No element exists at the given runtime location.
    #[error("no element at '{array_parents}'")]
    ElementNotFound { array_parents: String },

    /// Trigger does not belong to a multi-value element.
    #[error("element at '{array_parents}' is not a multi-value element")]
    NotMultiValue { array_parents: String },

    /// Element has an empty structural path.
    #[error("element has no structural path")]
    MissingPath,

    /// Failed to read or write the configuration file.
    #[error("failed to access config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ElementError {
    pub(crate) fn not_found(array_parents: &[String]) -> Self {
        Self::ElementNotFound {
            array_parents: array_parents.join("/"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ElementError>;
