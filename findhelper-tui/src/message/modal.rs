//! Modal sub-messages.

/// Messages handled while a modal is open.
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Dismiss the active modal.
    Close,
}
