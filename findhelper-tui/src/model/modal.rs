//! Modal/dialog state.

/// Modal kinds.
#[derive(Debug, Clone)]
pub enum Modal {
    /// Blocking success acknowledgment (Enter/Esc dismiss).
    Success { message: String },
    /// Key-binding help.
    Help,
}

/// Modal state.
#[derive(Debug, Default)]
pub struct ModalState {
    /// Currently active modal, if any.
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the active modal.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Whether a modal is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Show the success acknowledgment.
    pub fn show_success(&mut self, message: &str) {
        self.active = Some(Modal::Success {
            message: message.to_string(),
        });
    }

    /// Show the help dialog.
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
