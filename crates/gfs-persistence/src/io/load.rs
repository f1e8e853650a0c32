//! Session loading operations.

use std::fs;
use std::path::Path;

use crate::codec::{self, RestoredSession};
use crate::error::{Result, SessionError};

/// Load and sanitize a session from a file.
///
/// `page_count` bounds the restored step. Any failure leaves the caller's
/// state untouched; the restored value only exists on success.
pub fn load_session(path: &Path, page_count: usize) -> Result<RestoredSession> {
    let raw = fs::read_to_string(path).map_err(|e| SessionError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let restored = codec::decode(&raw, page_count)?;

    tracing::info!(
        answers = restored.answers.len(),
        step = restored.step,
        "Loaded session from {}",
        path.display()
    );
    Ok(restored)
}

/// Load a session asynchronously.
///
/// Spawns the load operation on a blocking thread pool to avoid
/// blocking the async runtime.
pub async fn load_session_async(
    path: std::path::PathBuf,
    page_count: usize,
) -> Result<RestoredSession> {
    tokio::task::spawn_blocking(move || load_session(&path, page_count))
        .await
        .map_err(|e| SessionError::InvalidFormat {
            reason: format!("background read failed: {e}"),
        })?
}
