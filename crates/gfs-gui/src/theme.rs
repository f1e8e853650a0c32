//! Spacing constants and shared widget styles.
//!
//! Styles derive everything from Iced's extended palette so they track the
//! active theme; only layout metrics are fixed here.

use iced::widget::{button, container, progress_bar, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - overlays, toasts
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Full/pill radius - progress bars
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the main action on a screen.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: palette.primary.base.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.weak.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Secondary button style - alternative actions (Back, Import).
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.weak.color,
        _ => palette.background.base.color,
    };
    let text_color = match status {
        button::Status::Disabled => palette.background.strong.color,
        _ => palette.background.base.text,
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Breadcrumb step button: filled when active, quiet otherwise.
pub fn button_breadcrumb(
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + 'static {
    move |theme, status| {
        let palette = theme.extended_palette();

        let (background, text_color) = if active {
            (Some(palette.primary.weak.color), palette.primary.base.color)
        } else {
            match status {
                button::Status::Hovered => {
                    (Some(palette.background.weak.color), palette.background.base.text)
                }
                _ => (None, palette.background.strong.color),
            }
        };

        button::Style {
            background: background.map(Into::into),
            text_color,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.base.color,
        text_input::Status::Hovered => palette.background.strong.color,
        _ => palette.background.weak.color,
    };
    let border_width = match status {
        text_input::Status::Focused { .. } => 2.0,
        _ => 1.0,
    };

    text_input::Style {
        background: palette.background.base.color.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: palette.background.strong.color,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container: elevated panel with a subtle border.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: palette.background.weak.color,
        },
        ..Default::default()
    }
}

/// Full-window veil shown while a file is dragged over the window.
pub fn drop_veil(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let accent = palette.primary.base.color;

    container::Style {
        background: Some(Color { a: 0.08, ..accent }.into()),
        border: Border {
            radius: 0.0.into(),
            width: 3.0,
            color: accent,
        },
        ..Default::default()
    }
}

// =============================================================================
// PROGRESS BAR STYLES
// =============================================================================

/// Primary progress bar style.
pub fn progress_bar_primary(theme: &Theme) -> progress_bar::Style {
    let palette = theme.extended_palette();

    progress_bar::Style {
        background: palette.background.weak.color.into(),
        bar: palette.primary.base.color.into(),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}
