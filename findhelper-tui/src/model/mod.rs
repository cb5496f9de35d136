//! Model layer: application state.
//!
//! The single source of truth for the UI. This layer holds plain data
//! structures only; every mutation goes through the update layer, and the
//! view layer reads the model without changing it.

mod app;
mod form;
mod modal;

pub use app::App;
pub use form::{
    FormState, FETCH_ERROR_MESSAGE, FIELD_ORDER, SUBMIT_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
pub use modal::{Modal, ModalState};
