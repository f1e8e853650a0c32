//! Toast notification component.
//!
//! Shows a temporary status message that auto-dismisses after a timeout.
//! At most one toast is visible at a time; showing a new one replaces the
//! current one and restarts its countdown (see `AppState::set_toast`).

use std::time::Duration;

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{BORDER_RADIUS_LG, SPACING_MD, SPACING_SM, SPACING_XS};

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Toast notification state.
#[derive(Debug, Clone)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Toast type determines the icon and styling.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    /// A completed operation (green check icon).
    Success,
    /// A failed operation (red X icon).
    Error,
}

impl ToastState {
    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Success,
        }
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Error,
        }
    }
}

/// Renders a toast notification.
///
/// The toast appears at the bottom-right of the window and can be dismissed
/// with its close button before the timer fires.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let toast_type = state.toast_type;

    let icon = match toast_type {
        ToastType::Success => lucide::circle_check().size(18).style(|theme: &Theme| {
            text::Style {
                color: Some(theme.extended_palette().success.base.color),
            }
        }),
        ToastType::Error => lucide::circle_x().size(18).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }),
    };

    let message_text = text(&state.message).size(14);

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::ToastDismissed)
        .padding(SPACING_XS)
        .style(button::text);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        message_text,
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: BORDER_RADIUS_LG.into(),
                },
                shadow: Shadow {
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        })
        .into()
}
