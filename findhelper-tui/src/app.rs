//! Application main loop.
//!
//! Roughly once per 100 ms (sooner when input arrives):
//! draw, drain completed backend events, poll input, update.

use std::time::Duration;

use anyhow::Result;

use crate::backend::ApiService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the main loop until the user quits.
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut ApiService) -> Result<()> {
    // Kick off the initial profile load before the first frame.
    let generation = app.form.begin_load();
    backend.load(generation, &app.user_id);

    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        // Completed backend work first, so results show on this frame.
        while let Some(event) = backend.try_next_event() {
            update::update(app, backend, AppMessage::Backend(event));
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, backend, msg);
        }
    }

    Ok(())
}
