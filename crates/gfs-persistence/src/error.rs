//! Persistence error types.
//!
//! Every session operation returns a structured error with a user-facing
//! message; none of these are fatal to the application.

use std::path::PathBuf;
use thiserror::Error;

/// Session import/export error.
#[derive(Debug, Error)]
pub enum SessionError {
    /// File I/O error. `operation: "read"` is the unreadable-file case on
    /// import; other operations occur while exporting.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The imported document is malformed or structurally wrong.
    #[error("Invalid session file: {reason}")]
    InvalidFormat { reason: String },

    /// Encoding the export payload failed.
    #[error("Failed to serialize session data")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The temp file could not be renamed onto the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    /// Get a user-friendly message for this error, suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidFormat { reason } => {
                format!("That file is not a valid session export: {reason}")
            }
            Self::Serialization { .. } => {
                "An error occurred while preparing the export.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidFormat { .. } => {
                Some("Make sure you selected a file exported from this application.".into())
            }
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
