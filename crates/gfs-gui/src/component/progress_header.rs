//! Wizard header: breadcrumb steps, progress bar, and the import entry
//! point.

use iced::widget::{Space, button, column, progress_bar, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    SPACING_SM, SPACING_XS, button_breadcrumb, button_secondary, progress_bar_primary,
};

/// Render the header shown on every step.
pub fn view_progress_header(state: &AppState) -> Element<'_, Message> {
    let cursor = &state.cursor;

    // Breadcrumbs: one button per page, plus the terminal summary state.
    // Every one of them is just a go_to, so clicking around can never leave
    // the valid step range.
    let mut crumbs = row![].spacing(SPACING_XS).align_y(Alignment::Center);
    for (index, page) in state.definition.pages.iter().enumerate() {
        crumbs = crumbs.push(breadcrumb(&page.title, index, cursor.current()));
    }
    crumbs = crumbs.push(breadcrumb(
        "Summary",
        cursor.page_count(),
        cursor.current(),
    ));

    let import_btn = button(
        row![
            lucide::upload().size(14),
            Space::new().width(SPACING_XS),
            text("Import").size(13),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::ImportRequested)
    .padding([SPACING_XS, SPACING_SM])
    .style(button_secondary);

    let top_row = row![crumbs, Space::new().width(Length::Fill), import_btn]
        .align_y(Alignment::Center);

    let bar = progress_bar(0.0..=100.0, cursor.progress_percent())
        .girth(6.0)
        .style(progress_bar_primary);

    column![top_row, Space::new().height(SPACING_SM), bar].into()
}

/// A single breadcrumb step button.
fn breadcrumb(title: &str, index: usize, current: usize) -> Element<'_, Message> {
    button(text(title).size(13))
        .on_press(Message::StepClicked(index))
        .padding([SPACING_XS, SPACING_SM])
        .style(button_breadcrumb(index == current))
        .into()
}
