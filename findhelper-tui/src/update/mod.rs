//! Update layer: the only place application state changes.
//!
//! `update` consumes one message, mutates the model, and hands long-running
//! work to the backend. It never blocks.

mod backend;
mod form;
mod modal;

use crate::backend::ApiService;
use crate::message::AppMessage;
use crate::model::App;

pub fn update(app: &mut App, backend: &ApiService, msg: AppMessage) {
    match msg {
        AppMessage::Quit => app.should_quit = true,
        AppMessage::Form(msg) => form::handle(app, backend, msg),
        AppMessage::Modal(msg) => modal::handle(app, msg),
        AppMessage::Backend(event) => backend::handle(app, event),
        AppMessage::Refresh => {
            let generation = app.form.begin_load();
            app.set_status("Loading profile...");
            backend.load(generation, &app.user_id);
        }
        AppMessage::ShowHelp => app.modal.show_help(),
        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests;
