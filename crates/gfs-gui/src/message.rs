//! Message types for the Elm-style architecture.
//!
//! All user interactions and system events flow through [`Message`]; the
//! `update` function is the only place state changes in response to them.

use std::path::PathBuf;

use gfs_persistence::RestoredSession;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// A breadcrumb step was clicked.
    StepClicked(usize),

    /// The primary navigation button was pressed (Next / View summary /
    /// Download summary, depending on the current step).
    NextPressed,

    /// The Back button was pressed.
    BackPressed,

    // =========================================================================
    // Editing
    // =========================================================================
    /// The user edited an answer field.
    AnswerEdited { field_id: String, value: String },

    // =========================================================================
    // Session export
    // =========================================================================
    /// The save dialog returned a target path (or was cancelled).
    ExportPathSelected(Option<PathBuf>),

    /// Writing the session file finished.
    SessionSaved(Result<PathBuf, String>),

    // =========================================================================
    // Session import
    // =========================================================================
    /// The user asked to import via the file picker.
    ImportRequested,

    /// The open dialog returned a file (or was cancelled).
    ImportPathSelected(Option<PathBuf>),

    /// Reading and sanitizing the session file finished.
    SessionRestored(Result<RestoredSession, String>),

    // =========================================================================
    // Drag & drop (whole-window drop target)
    // =========================================================================
    /// A dragged file entered the window.
    FileHovered,

    /// The dragged file left the window without dropping.
    FileHoverLeft,

    /// A file was dropped onto the window.
    FileDropped(PathBuf),

    // =========================================================================
    // Toast notifications
    // =========================================================================
    /// The auto-dismiss timer for a toast fired. The sequence number
    /// identifies which toast the timer belonged to; stale timers are
    /// ignored.
    ToastExpired(u64),

    /// The user dismissed the toast explicitly.
    ToastDismissed,
}
