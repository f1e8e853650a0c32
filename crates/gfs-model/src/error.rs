//! Model error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a form definition.
///
/// Definitions are configuration: these errors surface at startup (or when
/// the user points the app at a replacement file), never during a session.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The definition file could not be read.
    #[error("Failed to read form definition: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition text is not valid JSON for the expected shape.
    #[error("Invalid form definition")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}
