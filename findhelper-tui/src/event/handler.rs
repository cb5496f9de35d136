//! Event handler.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage};
use crate::model::App;

/// Polls for an input event, waiting at most `timeout`.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translates a raw terminal event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize triggers an automatic redraw on the next tick.
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press events; Release and Repeat cause double input on Windows
    // terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open modal captures all input.
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) || DefaultKeymap::REFRESH_ALT.matches(&key) {
        return AppMessage::Refresh;
    }

    handle_form_keys(key)
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab / ↓: next field
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // Shift+Tab / ↑: previous field
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // ← →: cycle the focused select (no-op on text fields)
        KeyCode::Left => AppMessage::Form(FormMessage::PrevOption),
        KeyCode::Right => AppMessage::Form(FormMessage::NextOption),

        // Enter: validate and submit
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit),

        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}
