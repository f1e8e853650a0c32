//! Step navigation handlers.
//!
//! All three entry points reduce to `StepCursor::go_to`, which clamps into
//! the valid range, so no click sequence can escape `[0, page_count]`.

use iced::Task;

use crate::handler::session;
use crate::message::Message;
use crate::state::AppState;

/// Handle a breadcrumb click.
pub fn handle_step_clicked(state: &mut AppState, index: usize) -> Task<Message> {
    state.cursor.go_to(index as i64);
    Task::none()
}

/// Handle the primary navigation button.
///
/// On the summary step the primary action is the export; everywhere else it
/// advances one step.
pub fn handle_next(state: &mut AppState) -> Task<Message> {
    if state.cursor.is_summary() {
        session::begin_export()
    } else {
        state.cursor.next();
        Task::none()
    }
}

/// Handle the Back button. The button is disabled at step 0, but the cursor
/// would refuse to move anyway.
pub fn handle_back(state: &mut AppState) -> Task<Message> {
    state.cursor.back();
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfs_model::FormDefinition;

    fn state_with_pages(count: usize) -> AppState {
        let pages: Vec<String> = (0..count)
            .map(|i| format!("{{\"title\": \"Page {i}\"}}"))
            .collect();
        let json = format!("{{\"pages\": [{}]}}", pages.join(","));
        AppState::new(FormDefinition::from_json(&json).unwrap())
    }

    #[test]
    fn breadcrumb_clicks_stay_in_range() {
        let mut state = state_with_pages(3);
        let _ = handle_step_clicked(&mut state, 99);
        assert_eq!(state.cursor.current(), 3);
    }

    #[test]
    fn next_advances_until_summary() {
        let mut state = state_with_pages(2);
        let _ = handle_next(&mut state);
        assert_eq!(state.cursor.current(), 1);
        let _ = handle_next(&mut state);
        assert!(state.cursor.is_summary());
    }

    #[test]
    fn back_at_first_step_is_a_no_op() {
        let mut state = state_with_pages(2);
        let _ = handle_back(&mut state);
        assert_eq!(state.cursor.current(), 0);
    }
}
