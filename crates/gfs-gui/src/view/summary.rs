//! Summary view: every page's questions with the answers entered so far.
//!
//! This is the terminal step. The primary button exports the session from
//! here; the view itself reads the live answer sheet, so edits on earlier
//! steps are reflected the moment the user navigates back.

use iced::widget::{Space, column, container, scrollable, text};
use iced::{Element, Length, Theme};

use gfs_model::field_id;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, card};

/// Render the summary step.
pub fn view_summary(state: &AppState) -> Element<'_, Message> {
    let mut sections = column![].spacing(SPACING_MD);

    for (index, page) in state.definition.pages.iter().enumerate() {
        let mut entries = column![].spacing(SPACING_SM);

        for item in &page.items {
            let id = field_id(index, &item.question);
            let answer = state.answers.answer(&id);

            let answer_text: Element<'_, Message> = if answer.is_empty() {
                text("Not answered")
                    .size(13)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.color),
                    })
                    .into()
            } else {
                text(answer).size(13).into()
            };

            entries = entries.push(
                column![
                    text(&item.question)
                        .size(12)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().background.strong.color),
                        }),
                    answer_text,
                ]
                .spacing(SPACING_XS),
            );
        }

        sections = sections.push(
            container(
                column![
                    text(&page.title).size(15),
                    Space::new().height(SPACING_SM),
                    entries,
                ]
                .width(Length::Fill),
            )
            .padding(SPACING_MD)
            .style(card),
        );
    }

    let content = column![
        text("Summary").size(22),
        Space::new().height(SPACING_SM),
        text("Review your answers, then download them as a file. You can restore them later by importing the file or dropping it onto this window.")
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            }),
        Space::new().height(SPACING_LG),
        sections,
    ]
    .width(Length::Fill);

    scrollable(content).height(Length::Fill).into()
}
