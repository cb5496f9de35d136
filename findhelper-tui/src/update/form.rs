//! Form message handling.

use crate::backend::ApiService;
use crate::message::FormMessage;
use crate::model::App;

pub fn handle(app: &mut App, backend: &ApiService, msg: FormMessage) {
    match msg {
        FormMessage::NextField => app.form.focus_next(),
        FormMessage::PrevField => app.form.focus_prev(),
        FormMessage::Input(ch) => app.form.input(ch),
        FormMessage::Backspace => app.form.backspace(),
        FormMessage::NextOption => app.form.cycle_option(true),
        FormMessage::PrevOption => app.form.cycle_option(false),
        FormMessage::Submit => submit(app, backend),
    }
}

/// Validates and dispatches the update request.
///
/// While a submission is in flight further submits are ignored, and an
/// invalid form never reaches the network.
fn submit(app: &mut App, backend: &ApiService) {
    if app.form.submitting {
        return;
    }
    if let Some(request) = app.form.prepare_submit() {
        app.form.submitting = true;
        app.set_status("Updating profile...");
        backend.submit(&app.user_id, request);
    }
}
