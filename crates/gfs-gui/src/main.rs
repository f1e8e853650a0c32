//! Guided Form Studio - Desktop questionnaire wizard.
//!
//! Walks the user through a sequence of form pages, collects free-text
//! answers, and exports or restores the whole session as a portable JSON
//! file (via a save dialog, a file picker, or dropping a file anywhere on
//! the window).
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

// Module declarations
mod app;
mod component;
mod handler;
mod message;
mod state;
mod theme;
mod view;

use app::App;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Guided Form Studio");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(900.0, 720.0),
            min_size: Some(Size::new(720.0, 560.0)),
            ..Default::default()
        })
        .run()
}
