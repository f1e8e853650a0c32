//! Whole-window drop overlay.
//!
//! Shown while a file is dragged anywhere over the window; the entire
//! application surface is the drop target, not an individual widget.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{SPACING_SM, drop_veil};

/// Render the drag-active veil stacked over the whole window.
pub fn view_drop_overlay<'a>() -> Element<'a, Message> {
    let hint = column![
        lucide::download().size(40).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        }),
        Space::new().height(SPACING_SM),
        text("Drop your session file to import it").size(16),
    ]
    .align_x(Alignment::Center);

    container(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(drop_veil)
        .into()
}
