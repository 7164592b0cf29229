//! Result and error types for Soneto.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Soneto operations
pub type SonetoResult<T> = Result<T, SonetoError>;

/// Errors that can occur in Soneto
#[derive(Debug, Error)]
pub enum SonetoError {
    /// A verb was dispatched before any `load_selectors` call
    #[error("Selectors not loaded. Call load_selectors before dispatching verbs")]
    SelectorsNotLoaded,

    /// Strict mode only: a name has no entry in the registry
    #[error("Unknown selector: {name:?}")]
    UnknownSelector {
        /// Name that failed to resolve
        name: String,
    },

    /// Reading a selector document from disk failed
    #[error("Failed to read selector document {}: {source}", .path.display())]
    DocumentRead {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A selector document is not a flat string-to-string mapping
    #[error("Failed to parse selector document {}: {source}", .path.display())]
    DocumentParse {
        /// Path of the document
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Failure raised by the underlying automation driver
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },
}

impl SonetoError {
    /// Construct a delegated driver failure
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }
}
