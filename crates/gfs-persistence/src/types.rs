//! Export payload types and format constants.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current payload schema version. A forward-compatibility marker; readers
/// warn on newer versions but do not reject them.
pub const PAYLOAD_VERSION: u32 = 1;

/// Fixed file name suggested for every export. Stable across exports so a
/// re-export lands on the same file by default.
pub const EXPORT_FILE_NAME: &str = "guided-form-session.json";

/// The versioned export document.
///
/// Field names serialize in camelCase to match the on-disk interchange
/// format. Reading goes through [`crate::decode`], never through a typed
/// deserializer, so this type is serialize-only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Schema version (see [`PAYLOAD_VERSION`]).
    pub version: u32,

    /// When the session was exported (RFC 3339).
    pub exported_at: String,

    /// Step the user was on at export time.
    pub current_step: usize,

    /// All answers, keyed by field identifier.
    pub answers: BTreeMap<String, String>,
}

impl SessionSnapshot {
    /// Create a snapshot of the current session, stamped with the current
    /// time.
    pub fn new(current_step: usize, answers: BTreeMap<String, String>) -> Self {
        Self {
            version: PAYLOAD_VERSION,
            exported_at: Utc::now().to_rfc3339(),
            current_step,
            answers,
        }
    }

    /// Parse the export timestamp.
    pub fn exported_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.exported_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
