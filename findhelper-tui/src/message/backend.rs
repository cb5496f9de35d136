//! Backend completion events.

use findhelper_api::{ApiError, Location, ServiceProvider};

/// Outcome of a spawned backend task, delivered through the event channel.
///
/// Load outcomes carry the generation of the load that produced them; the
/// update layer discards events whose generation no longer matches the form,
/// so a slow response can never clobber the result of a newer refresh.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// Both initial reads succeeded.
    LoadCompleted {
        generation: u64,
        provider: Box<ServiceProvider>,
        locations: Vec<Location>,
    },
    /// Either initial read failed; no partial data is delivered.
    LoadFailed { generation: u64, error: ApiError },
    /// The update request was accepted (HTTP 200).
    UpdateSucceeded,
    /// The update request failed.
    UpdateFailed { error: ApiError },
}
