//! Event layer: translates terminal input into messages.
//!
//! The main loop polls for input with [`poll_event`], and [`handle_event`]
//! turns each raw event into an [`crate::message::AppMessage`] for the
//! update layer. Nothing in here mutates state.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
