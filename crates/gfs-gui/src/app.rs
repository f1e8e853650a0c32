//! Main application: the Iced update/view/subscription wiring.
//!
//! Follows the Elm pattern: all state changes happen in `update`, views are
//! pure functions of `AppState`, and runtime events arrive through the
//! subscription.

use std::path::Path;

use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Event, Subscription, Task, Theme, event, window};

use gfs_model::FormDefinition;

use crate::component::drop_overlay::view_drop_overlay;
use crate::component::toast::view_toast;
use crate::handler::{navigation, session};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::SPACING_LG;
use crate::view::view_root;

/// Embedded default questionnaire, used when no definition file is given.
const DEFAULT_DEFINITION: &str = include_str!("../assets/definition.json");

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. The form definition is loaded here and stays
    /// read-only afterwards.
    pub fn new() -> (Self, Task<Message>) {
        let definition = load_definition();
        tracing::info!(pages = definition.page_count(), "Form definition loaded");

        (
            Self {
                state: AppState::new(definition),
            },
            Task::none(),
        )
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::StepClicked(index) => {
                navigation::handle_step_clicked(&mut self.state, index)
            }

            Message::NextPressed => navigation::handle_next(&mut self.state),

            Message::BackPressed => navigation::handle_back(&mut self.state),

            // =================================================================
            // Editing
            // =================================================================
            Message::AnswerEdited { field_id, value } => {
                self.state.answers.set(field_id, value);
                Task::none()
            }

            // =================================================================
            // Session export
            // =================================================================
            Message::ExportPathSelected(path) => {
                session::handle_export_path_selected(&self.state, path)
            }

            Message::SessionSaved(result) => {
                session::handle_session_saved(&mut self.state, result)
            }

            // =================================================================
            // Session import
            // =================================================================
            Message::ImportRequested => session::begin_import(),

            Message::ImportPathSelected(path) => {
                session::handle_import_path_selected(&mut self.state, path)
            }

            Message::SessionRestored(result) => {
                session::handle_session_restored(&mut self.state, result)
            }

            // =================================================================
            // Drag & drop
            // =================================================================
            Message::FileHovered => {
                self.state.drag_active = true;
                Task::none()
            }

            Message::FileHoverLeft => {
                self.state.drag_active = false;
                Task::none()
            }

            Message::FileDropped(path) => session::handle_file_dropped(&mut self.state, path),

            // =================================================================
            // Toast notifications
            // =================================================================
            Message::ToastExpired(seq) => {
                self.state.expire_toast(seq);
                Task::none()
            }

            Message::ToastDismissed => {
                self.state.dismiss_toast();
                Task::none()
            }
        }
    }

    /// Render the window content.
    ///
    /// This is a pure function that produces UI based on current state; the
    /// toast and the drag veil are stacked over the wizard.
    pub fn view(&self) -> Element<'_, Message> {
        let content = container(view_root(&self.state))
            .width(iced::Length::Fill)
            .height(iced::Length::Fill);

        let mut layers = stack![content];

        if self.state.drag_active {
            layers = layers.push(view_drop_overlay());
        }

        if let Some(toast) = &self.state.toast {
            // Position the toast at the bottom-right using flex space.
            let toast_row = row![
                Space::new().width(iced::Length::Fill),
                container(view_toast(toast)).padding([0.0, SPACING_LG]),
            ];
            let toast_layer = column![
                Space::new().height(iced::Length::Fill),
                toast_row,
                Space::new().height(SPACING_LG),
            ];
            layers = layers.push(toast_layer);
        }

        layers.into()
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        match self.state.current_page() {
            Some(page) => format!("{} - Guided Form Studio", page.title),
            None => "Summary - Guided Form Studio".to_string(),
        }
    }

    /// Get the theme.
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Subscribe to runtime events.
    ///
    /// The whole window is a drop target, so file drag events are listened
    /// for at the window level rather than on a widget. The subscription is
    /// declarative: it exists exactly as long as the application does, so
    /// the listeners cannot leak past teardown.
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }
}

/// Load the form definition: a path given on the command line, falling back
/// to the embedded default questionnaire.
fn load_definition() -> FormDefinition {
    if let Some(arg) = std::env::args().nth(1) {
        match FormDefinition::from_path(Path::new(&arg)) {
            Ok(definition) => return definition,
            Err(e) => {
                tracing::error!(
                    "Failed to load form definition from {arg}: {e}; using the built-in questionnaire"
                );
            }
        }
    }

    match FormDefinition::from_json(DEFAULT_DEFINITION) {
        Ok(definition) => definition,
        Err(e) => {
            tracing::error!("Built-in form definition is invalid: {e}");
            FormDefinition::default()
        }
    }
}
