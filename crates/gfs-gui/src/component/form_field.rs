//! Answer field component.
//!
//! One question of the active page: area caption, question label, the text
//! input bound to the question's field identifier, and optional help text.

use iced::widget::{column, container, text, text_input};
use iced::{Element, Length, Theme};

use gfs_model::FormItem;

use crate::message::Message;
use crate::theme::{SPACING_XS, text_input_default};

/// Render an answer field for one form item.
///
/// `field_id` is the derived identifier addressing this answer; every edit
/// is forwarded as [`Message::AnswerEdited`] keyed by it.
pub fn answer_field<'a>(
    item: &'a FormItem,
    field_id: String,
    value: &'a str,
) -> Element<'a, Message> {
    let mut content = column![].spacing(SPACING_XS);

    if !item.area.is_empty() {
        let area_text = text(&item.area).size(11).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        });
        content = content.push(area_text);
    }

    let question_text = text(&item.question).size(14);

    let input = text_input("Type your answer...", value)
        .on_input(move |new_value| Message::AnswerEdited {
            field_id: field_id.clone(),
            value: new_value,
        })
        .padding(10.0)
        .width(Length::Fill)
        .style(text_input_default);

    content = content.push(question_text).push(input);

    if !item.help.is_empty() {
        let help_text = text(&item.help).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        });
        content = content.push(help_text);
    }

    container(content).width(Length::Fill).into()
}
