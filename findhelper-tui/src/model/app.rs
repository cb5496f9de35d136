//! Application root state.

use super::{FormState, ModalState};

/// Application root state.
pub struct App {
    /// Whether the main loop should exit.
    pub should_quit: bool,

    /// The service-provider id being edited (the route parameter analog).
    pub user_id: String,

    /// Status bar message.
    pub status_message: Option<String>,

    /// The update-profile form.
    pub form: FormState,

    /// Modal state.
    pub modal: ModalState,
}

impl App {
    /// Create the initial application state for editing `user_id`.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            user_id: user_id.into(),
            status_message: None,
            form: FormState::new(),
            modal: ModalState::new(),
        }
    }

    /// Set the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
