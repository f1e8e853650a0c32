//! Form definition types.
//!
//! The definition is supplied once at startup (embedded asset or a JSON file
//! chosen by the user) and is read-only for the rest of the process lifetime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// A complete form definition: an ordered sequence of pages.
///
/// The definition places no constraints on its own size; a definition with
/// zero pages simply renders as a summary-only wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Pages in display order.
    pub pages: Vec<FormPage>,
}

/// One page of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormPage {
    /// Page title, shown in the step header and breadcrumb.
    pub title: String,

    /// Questions on this page, in display order.
    #[serde(default)]
    pub items: Vec<FormItem>,
}

/// A single question on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormItem {
    /// Topic grouping label (e.g. "Identity", "Budget").
    #[serde(default)]
    pub area: String,

    /// The question text. Also the input to field identifier derivation,
    /// so it is expected to be non-empty for meaningful identifiers.
    pub question: String,

    /// Optional help text shown under the input.
    #[serde(default)]
    pub help: String,
}

impl FormDefinition {
    /// Parse a definition from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(raw).map_err(|e| DefinitionError::Parse { source: e })
    }

    /// Load a definition from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, DefinitionError> {
        let raw = std::fs::read_to_string(path).map_err(|e| DefinitionError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&raw)
    }

    /// Number of pages, excluding the terminal summary state.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index.
    pub fn page(&self, index: usize) -> Option<&FormPage> {
        self.pages.get(index)
    }
}
