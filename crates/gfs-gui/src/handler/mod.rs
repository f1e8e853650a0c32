//! Message handlers, organized by category.
//!
//! Handlers mutate `AppState` and return the follow-up [`Task`], keeping
//! `App::update` a thin dispatcher.

pub mod navigation;
pub mod session;

use iced::Task;

use crate::component::toast::{TOAST_DURATION, ToastState};
use crate::message::Message;
use crate::state::AppState;

/// Show a toast and schedule its auto-dismiss timer.
///
/// The timer carries the toast's sequence number; if the toast has been
/// replaced by the time the timer fires, `expire_toast` recognizes the stale
/// sequence and leaves the newer message alone. Replacing therefore always
/// restarts the countdown.
pub fn show_toast(state: &mut AppState, toast: ToastState) -> Task<Message> {
    let seq = state.set_toast(toast);
    Task::perform(
        async move {
            tokio::time::sleep(TOAST_DURATION).await;
            seq
        },
        Message::ToastExpired,
    )
}
