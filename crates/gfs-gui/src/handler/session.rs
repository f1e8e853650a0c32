//! Session export/import handlers.
//!
//! Export: save dialog -> write the snapshot atomically -> toast.
//! Import: file picker or window drop -> background read + sanitize ->
//! replace the sheet and move the cursor -> toast. Failures never touch the
//! existing session; the user just sees an error toast.

use std::path::PathBuf;

use iced::Task;

use gfs_persistence::{
    EXPORT_FILE_NAME, RestoredSession, SessionSnapshot, load_session_async, save_session_async,
};

use crate::component::toast::ToastState;
use crate::handler::show_toast;
use crate::message::Message;
use crate::state::AppState;

// =============================================================================
// EXPORT
// =============================================================================

/// Open the save dialog for the session export.
///
/// The suggested file name is fixed and stable across exports, so repeated
/// downloads land on the same file by default.
pub fn begin_export() -> Task<Message> {
    // On macOS, use synchronous dialog to avoid security-scoped access issues
    #[cfg(target_os = "macos")]
    {
        let path = rfd::FileDialog::new()
            .set_title("Download Summary")
            .add_filter("JSON", &["json"])
            .set_file_name(EXPORT_FILE_NAME)
            .save_file();

        Task::done(Message::ExportPathSelected(path))
    }

    #[cfg(not(target_os = "macos"))]
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Download Summary")
                .add_filter("JSON", &["json"])
                .set_file_name(EXPORT_FILE_NAME)
                .save_file()
                .await
                .map(|f| f.path().to_path_buf())
        },
        Message::ExportPathSelected,
    )
}

/// Handle the save dialog result and write the snapshot.
pub fn handle_export_path_selected(state: &AppState, path: Option<PathBuf>) -> Task<Message> {
    let Some(mut path) = path else {
        return Task::none();
    };

    // Ensure .json extension
    if path.extension() != Some(std::ffi::OsStr::new("json")) {
        path.set_extension("json");
    }

    let snapshot = SessionSnapshot::new(state.cursor.current(), state.answers.as_map().clone());

    Task::perform(
        async move {
            match save_session_async(snapshot, path.clone()).await {
                Ok(()) => Ok(path),
                Err(e) => Err(e.user_message()),
            }
        },
        Message::SessionSaved,
    )
}

/// Handle save completion.
pub fn handle_session_saved(
    state: &mut AppState,
    result: Result<PathBuf, String>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!("Session exported to {}", path.display());
            show_toast(state, ToastState::success("Answers saved"))
        }
        Err(message) => {
            tracing::error!("Failed to export session: {message}");
            show_toast(state, ToastState::error(message))
        }
    }
}

// =============================================================================
// IMPORT
// =============================================================================

/// Open the file picker for a session import.
pub fn begin_import() -> Task<Message> {
    // On macOS, use synchronous dialog to avoid security-scoped access issues
    #[cfg(target_os = "macos")]
    {
        let path = rfd::FileDialog::new()
            .set_title("Import Answers")
            .add_filter("JSON", &["json"])
            .pick_file();

        Task::done(Message::ImportPathSelected(path))
    }

    #[cfg(not(target_os = "macos"))]
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Import Answers")
                .add_filter("JSON", &["json"])
                .pick_file()
                .await
                .map(|f| f.path().to_path_buf())
        },
        Message::ImportPathSelected,
    )
}

/// Handle the picker result.
pub fn handle_import_path_selected(state: &mut AppState, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    start_import(state, path)
}

/// Handle a file dropped onto the window. Only the first dropped file
/// matters; the in-flight permit swallows the rest of a multi-file drop.
pub fn handle_file_dropped(state: &mut AppState, path: PathBuf) -> Task<Message> {
    state.drag_active = false;
    start_import(state, path)
}

/// Kick off the background read, taking the single in-flight import permit.
fn start_import(state: &mut AppState, path: PathBuf) -> Task<Message> {
    if state.import_in_flight {
        tracing::debug!(
            "import already in flight; ignoring {}",
            path.display()
        );
        return Task::none();
    }
    state.import_in_flight = true;

    let page_count = state.definition.page_count();
    Task::perform(
        async move {
            load_session_async(path, page_count)
                .await
                .map_err(|e| e.user_message())
        },
        Message::SessionRestored,
    )
}

/// Handle import completion: apply the sanitized session, or report the
/// failure and leave everything as it was.
pub fn handle_session_restored(
    state: &mut AppState,
    result: Result<RestoredSession, String>,
) -> Task<Message> {
    state.import_in_flight = false;

    match result {
        Ok(restored) => {
            let count = restored.answers.len();
            state.answers.replace_all(restored.answers);
            state.cursor.go_to(restored.step as i64);
            tracing::info!(answers = count, step = restored.step, "Session imported");
            show_toast(state, ToastState::success("Answers imported"))
        }
        Err(message) => {
            tracing::error!("Failed to import session: {message}");
            show_toast(state, ToastState::error(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfs_model::FormDefinition;
    use std::collections::BTreeMap;

    fn three_page_state() -> AppState {
        let definition = FormDefinition::from_json(
            r#"{"pages": [{"title": "A"}, {"title": "B"}, {"title": "C"}]}"#,
        )
        .unwrap();
        AppState::new(definition)
    }

    fn restored(pairs: &[(&str, &str)], step: usize) -> RestoredSession {
        let answers: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        RestoredSession { answers, step }
    }

    #[test]
    fn successful_import_replaces_sheet_and_moves_cursor() {
        let mut state = three_page_state();
        state.answers.set("step-0-old", "stale");
        state.import_in_flight = true;

        let _ = handle_session_restored(&mut state, Ok(restored(&[("step-1-x", "y")], 2)));

        assert!(!state.import_in_flight);
        assert_eq!(state.answers.answer("step-0-old"), "");
        assert_eq!(state.answers.answer("step-1-x"), "y");
        assert_eq!(state.cursor.current(), 2);
        assert!(state.toast.is_some());
    }

    #[test]
    fn failed_import_leaves_prior_state_untouched() {
        let mut state = three_page_state();
        state.answers.set("step-0-kept", "value");
        state.cursor.go_to(1);
        state.import_in_flight = true;

        let _ = handle_session_restored(&mut state, Err("bad file".to_string()));

        assert!(!state.import_in_flight);
        assert_eq!(state.answers.answer("step-0-kept"), "value");
        assert_eq!(state.cursor.current(), 1);
        assert!(state.toast.is_some());
    }

    #[test]
    fn second_import_is_ignored_while_one_is_pending() {
        let mut state = three_page_state();

        let _ = start_import(&mut state, PathBuf::from("first.json"));
        assert!(state.import_in_flight);

        // A drop while the first read is pending takes no permit and spawns
        // no second read.
        let _ = handle_file_dropped(&mut state, PathBuf::from("second.json"));
        assert!(state.import_in_flight);
    }

    #[test]
    fn drop_clears_the_drag_highlight() {
        let mut state = three_page_state();
        state.drag_active = true;

        let _ = handle_file_dropped(&mut state, PathBuf::from("session.json"));
        assert!(!state.drag_active);
    }
}
