//! Findhelper provider console.
//!
//! Terminal front end for editing a service provider's public profile.
//! Follows the Elm Architecture:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: config, credentials, API dispatch (`backend/`)

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    let config = backend::AppConfig::load();
    if config.theme == "light" {
        view::theme::set_theme_index(1);
    }

    // The JWT normally lives in the OS keyring. FINDHELPER_JWT seeds it
    // (set to a token) or removes it (set to an empty value) before the
    // session starts.
    let tokens = Arc::new(backend::KeyringTokenStore::new());
    if let Ok(jwt) = std::env::var("FINDHELPER_JWT") {
        if jwt.is_empty() {
            tokens.clear_token()?;
        } else {
            tokens.save_token(&jwt)?;
        }
    }

    let mut backend_service = backend::ApiService::new(&config, tokens);
    let mut app = model::App::new(config.user_id.clone());

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend_service);
    restore_terminal(&mut terminal)?;

    result
}
