//! Async dispatch to the Findhelper backend.
//!
//! The update layer never awaits. Each call spawns a task that performs the
//! request and pushes a [`BackendEvent`] onto an unbounded channel; the main
//! loop drains the channel once per tick and feeds the events back through
//! the update layer.

use std::sync::Arc;

use findhelper_api::{FindhelperClient, TokenProvider, UpdateServiceProviderRequest};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::AppConfig;
use crate::message::BackendEvent;

pub struct ApiService {
    client: Arc<FindhelperClient>,
    events_tx: UnboundedSender<BackendEvent>,
    events_rx: UnboundedReceiver<BackendEvent>,
}

impl ApiService {
    pub fn new(config: &AppConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        let client = Arc::new(FindhelperClient::new(config.base_url.clone(), tokens));
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client,
            events_tx,
            events_rx,
        }
    }

    /// Fetches the provider record and location list for `user_id`.
    ///
    /// `generation` is echoed back in the resulting event so stale responses
    /// can be discarded after a newer load starts.
    pub fn load(&self, generation: u64, user_id: &str) {
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let user_id = user_id.to_string();
        tokio::spawn(async move {
            let event = match client.load_form_data(&user_id).await {
                Ok((provider, locations)) => BackendEvent::LoadCompleted {
                    generation,
                    provider: Box::new(provider),
                    locations,
                },
                Err(error) => {
                    if error.is_expected() {
                        log::warn!("Form data load failed: {error}");
                    } else {
                        log::error!("Form data load failed: {error}");
                    }
                    BackendEvent::LoadFailed { generation, error }
                }
            };
            let _ = tx.send(event);
        });
    }

    /// Submits the full form payload for `user_id`.
    pub fn submit(&self, user_id: &str, request: UpdateServiceProviderRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let user_id = user_id.to_string();
        tokio::spawn(async move {
            let event = match client.update_provider(&user_id, &request).await {
                Ok(()) => BackendEvent::UpdateSucceeded,
                Err(error) => {
                    if error.is_expected() {
                        log::warn!("Provider update failed: {error}");
                    } else {
                        log::error!("Provider update failed: {error}");
                    }
                    BackendEvent::UpdateFailed { error }
                }
            };
            let _ = tx.send(event);
        });
    }

    /// Returns the next completed backend event without blocking.
    pub fn try_next_event(&mut self) -> Option<BackendEvent> {
        self.events_rx.try_recv().ok()
    }
}
