//! Form page view: the active page's questions with their current answers.

use iced::widget::{Space, column, scrollable, text};
use iced::{Element, Length, Theme};

use gfs_model::{FormPage, field_id};

use crate::component::form_field::answer_field;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_SM};

/// Render one form page.
///
/// Each item's input is addressed by the identifier derived from the
/// current step and its question text, so the answers read and write the
/// same keys the export file carries.
pub fn view_page<'a>(state: &'a AppState, page: &'a FormPage) -> Element<'a, Message> {
    let step = state.cursor.current();

    let mut fields = column![].spacing(SPACING_LG);
    for item in &page.items {
        let id = field_id(step, &item.question);
        let value = state.answers.answer(&id);
        fields = fields.push(answer_field(item, id, value));
    }

    let content = column![
        text(&page.title).size(22),
        Space::new().height(SPACING_SM),
        step_counter(step, state.cursor.page_count()),
        Space::new().height(SPACING_LG),
        fields,
    ]
    .width(Length::Fill);

    scrollable(content).height(Length::Fill).into()
}

/// "Step N of M" caption under the page title.
fn step_counter<'a>(step: usize, page_count: usize) -> Element<'a, Message> {
    text(format!("Step {} of {}", step + 1, page_count))
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        })
        .into()
}
