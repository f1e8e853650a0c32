//! Views for the wizard.
//!
//! `view_root` lays out the header, the active step's content (a form page
//! or the summary), and the navigation row. Overlays (toast, drop veil) are
//! stacked on top in `App::view`.

mod page;
mod summary;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::component::progress_header::view_progress_header;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, button_primary, button_secondary,
};

pub use page::view_page;
pub use summary::view_summary;

/// Render the main window content for the current step.
pub fn view_root(state: &AppState) -> Element<'_, Message> {
    let content: Element<'_, Message> = match state.current_page() {
        Some(page) => view_page(state, page),
        None => view_summary(state),
    };

    column![
        view_progress_header(state),
        Space::new().height(SPACING_MD),
        container(content).width(Length::Fill).height(Length::Fill),
        Space::new().height(SPACING_MD),
        view_nav_row(state),
    ]
    .padding(SPACING_XL)
    .into()
}

/// Render the Back / primary-action row.
fn view_nav_row(state: &AppState) -> Element<'_, Message> {
    let cursor = &state.cursor;

    // Back is disabled (not hidden) on the first step.
    let back_btn = button(text("Back").size(14))
        .on_press_maybe((cursor.current() > 0).then_some(Message::BackPressed))
        .padding([SPACING_SM, SPACING_LG])
        .style(button_secondary);

    let primary_btn = button(text(cursor.primary_label()).size(14))
        .on_press(Message::NextPressed)
        .padding([SPACING_SM, SPACING_LG])
        .style(button_primary);

    row![back_btn, Space::new().width(Length::Fill), primary_btn]
        .align_y(Alignment::Center)
        .into()
}
