//! Application state.
//!
//! `AppState` is the root of all mutable state: the answer sheet and step
//! cursor (the session), plus transient UI state (drag highlight, import
//! permit, toast). The form definition is loaded once and read-only.
//!
//! All session mutations funnel through the narrow operation set on
//! `AnswerSheet` and `StepCursor`, so the invariants (clamped step,
//! string-only answers) are enforced in one place regardless of which event
//! source asked for the change.

use gfs_model::{AnswerSheet, FormDefinition, FormPage, StepCursor};

use crate::component::toast::ToastState;

/// Top-level application state.
pub struct AppState {
    /// The form definition (read-only after startup).
    pub definition: FormDefinition,

    /// All user-entered answers.
    pub answers: AnswerSheet,

    /// Current wizard position.
    pub cursor: StepCursor,

    /// Whether a file is currently being dragged over the window.
    pub drag_active: bool,

    /// Single in-flight import permit. While a session file is being read,
    /// further drops and picker selections are ignored, so overlapping
    /// imports cannot race.
    pub import_in_flight: bool,

    /// Current toast notification, if any.
    pub toast: Option<ToastState>,

    /// Sequence number of the live toast; bumped on every `set_toast` so
    /// stale auto-dismiss timers can be told apart from the current one.
    toast_seq: u64,
}

impl AppState {
    /// Create the initial state for a loaded form definition.
    pub fn new(definition: FormDefinition) -> Self {
        let cursor = StepCursor::new(definition.page_count());
        Self {
            definition,
            answers: AnswerSheet::new(),
            cursor,
            drag_active: false,
            import_in_flight: false,
            toast: None,
            toast_seq: 0,
        }
    }

    /// The page under the cursor, or `None` on the summary step.
    pub fn current_page(&self) -> Option<&FormPage> {
        self.definition.page(self.cursor.current())
    }

    /// Show a toast, replacing any existing one.
    ///
    /// Returns the new sequence number; the caller schedules the
    /// auto-dismiss timer carrying it. Replacing a toast invalidates the
    /// previous timer because the sequence moves on.
    pub fn set_toast(&mut self, toast: ToastState) -> u64 {
        self.toast = Some(toast);
        self.toast_seq = self.toast_seq.wrapping_add(1);
        self.toast_seq
    }

    /// Handle an auto-dismiss timer. Only the timer that belongs to the
    /// live toast clears it; earlier timers are stale and do nothing.
    pub fn expire_toast(&mut self, seq: u64) {
        if seq == self.toast_seq {
            self.toast = None;
        }
    }

    /// Explicit dismissal.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}
