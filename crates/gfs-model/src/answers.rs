//! The answer sheet.
//!
//! A flat mapping from field identifier to the user's answer text. Absence
//! of a key is equivalent to an empty answer, and values are always plain
//! strings; the sheet never interprets answer content.

use std::collections::BTreeMap;

/// All user-entered text, keyed by field identifier.
///
/// Every mutation is immediately visible to readers (summary and export
/// views read the live map; nothing is cached).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    entries: BTreeMap<String, String>,
}

impl AnswerSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The answer for a field, or the empty string when none was entered.
    pub fn answer(&self, field_id: &str) -> &str {
        self.entries.get(field_id).map_or("", String::as_str)
    }

    /// Store an answer. Any string is accepted verbatim, including empty.
    pub fn set(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(field_id.into(), value.into());
    }

    /// Replace the whole sheet atomically. Used by session import.
    pub fn replace_all(&mut self, entries: BTreeMap<String, String>) {
        self.entries = entries;
    }

    /// Borrow the underlying map (for export snapshots).
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Number of stored answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sheet holds no answers at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
