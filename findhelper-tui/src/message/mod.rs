//! Message layer: everything the update layer can react to.
//!
//! Input events are translated into messages by the event layer, and
//! completed backend work arrives as [`BackendEvent`]s drained from the
//! backend channel. The update layer consumes both through [`AppMessage`].

mod app;
mod backend;
mod form;
mod modal;

pub use app::AppMessage;
pub use backend::BackendEvent;
pub use form::FormMessage;
pub use modal::ModalMessage;
