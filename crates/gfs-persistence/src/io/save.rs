//! Session saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::codec;
use crate::error::{Result, SessionError};
use crate::types::SessionSnapshot;

/// Save a session snapshot to a JSON file.
///
/// Uses atomic write (temp file + rename) to prevent data corruption
/// on crash or power loss.
pub fn save_session(snapshot: &SessionSnapshot, path: &Path) -> Result<()> {
    let json = codec::encode(snapshot)?;

    // Write to a temp file first, then rename for atomicity
    let temp_path = path.with_extension("json.tmp");

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SessionError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| SessionError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(json.as_bytes()).map_err(|e| SessionError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| SessionError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| SessionError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        answers = snapshot.answers.len(),
        "Saved session to {}",
        path.display()
    );
    Ok(())
}

/// Save a session asynchronously.
///
/// Spawns the save operation on a blocking thread pool to avoid
/// blocking the async runtime.
pub async fn save_session_async(snapshot: SessionSnapshot, path: std::path::PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || save_session(&snapshot, &path))
        .await
        .map_err(|e| SessionError::Serialization { source: Box::new(e) })?
}
