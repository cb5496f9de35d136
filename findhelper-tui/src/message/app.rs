//! Top-level application messages.

use super::{BackendEvent, FormMessage, ModalMessage};

/// Top-level application message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Exit the application.
    Quit,
    /// Form sub-messages (editing, focus, submit).
    Form(FormMessage),
    /// Modal sub-messages.
    Modal(ModalMessage),
    /// A backend task completed.
    Backend(BackendEvent),
    /// Re-issue the initial load.
    Refresh,
    /// Show the help dialog.
    ShowHelp,
    /// No operation, used instead of `Option::None`.
    Noop,
}
