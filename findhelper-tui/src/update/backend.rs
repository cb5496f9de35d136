//! Backend event handling.

use crate::message::BackendEvent;
use crate::model::{App, SUBMIT_ERROR_MESSAGE, SUCCESS_MESSAGE};

pub fn handle(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::LoadCompleted {
            generation,
            provider,
            locations,
        } => {
            // A newer load has started since; drop the stale result.
            if generation != app.form.load_generation {
                return;
            }
            app.form.apply_loaded(*provider, locations);
            app.clear_status();
        }
        BackendEvent::LoadFailed { generation, .. } => {
            if generation != app.form.load_generation {
                return;
            }
            app.form.load_failed();
            app.clear_status();
        }
        BackendEvent::UpdateSucceeded => {
            app.form.submitting = false;
            app.form.banner_error = None;
            app.clear_status();
            app.modal.show_success(SUCCESS_MESSAGE);
        }
        BackendEvent::UpdateFailed { .. } => {
            app.form.submitting = false;
            app.form.banner_error = Some(SUBMIT_ERROR_MESSAGE.to_string());
            app.clear_status();
        }
    }
}
